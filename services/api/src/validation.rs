//! Input validation for meetup payloads
//!
//! Each endpoint has a static schema. Fields are checked in declaration order
//! and the first violation is returned as the error message.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::{Map, Value};

use crate::models::{CreateMeetupRequest, UpdateMeetup};

type Fields = Map<String, Value>;
type Parser<T> = fn(&str, &Value) -> Result<T, String>;

/// Validate a create body: every field is required
pub fn validate_create_meetup(body: &Value) -> Result<CreateMeetupRequest, String> {
    let fields = as_object(body)?;

    Ok(CreateMeetupRequest {
        title: required(fields, "title", parse_required_string)?,
        description: required(fields, "description", parse_required_string)?,
        location: required(fields, "location", parse_required_string)?,
        date: required(fields, "date", parse_date)?,
        file_id: required(fields, "file_id", parse_id)?,
    })
}

/// Validate an update body: every field is optional, present ones must be well typed
pub fn validate_update_meetup(body: &Value) -> Result<UpdateMeetup, String> {
    let fields = as_object(body)?;

    Ok(UpdateMeetup {
        title: optional(fields, "title", parse_string)?,
        description: optional(fields, "description", parse_string)?,
        location: optional(fields, "location", parse_string)?,
        date: optional(fields, "date", parse_date)?,
        file_id: optional(fields, "file_id", parse_id)?,
    })
}

fn as_object(body: &Value) -> Result<&Fields, String> {
    body.as_object()
        .ok_or_else(|| "request body must be a JSON object".to_string())
}

fn required<T>(fields: &Fields, name: &str, parse: Parser<T>) -> Result<T, String> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(required_error(name)),
        Some(value) => parse(name, value),
    }
}

fn optional<T>(fields: &Fields, name: &str, parse: Parser<T>) -> Result<Option<T>, String> {
    fields
        .get(name)
        .map(|value| parse(name, value))
        .transpose()
}

fn required_error(name: &str) -> String {
    format!("{name} is a required field")
}

fn type_error(name: &str, expected: &str, shown: &str) -> String {
    format!("{name} must be a `{expected}` type, but the final value was: `{shown}`.")
}

/// Strings, with numbers and booleans cast to their text form
fn parse_string(name: &str, value: &Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(type_error(name, "string", &other.to_string())),
    }
}

fn parse_required_string(name: &str, value: &Value) -> Result<String, String> {
    let s = parse_string(name, value)?;
    if s.is_empty() {
        return Err(required_error(name));
    }
    Ok(s)
}

/// Integer ids, numeric strings are cast
fn parse_id(name: &str, value: &Value) -> Result<i32, String> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    let number = match number {
        Some(n) if n.is_finite() => n,
        _ => {
            let shown = match value {
                Value::String(s) => format!("NaN` (cast from the value `\"{s}\"`)"),
                other => format!("{other}`"),
            };
            return Err(format!(
                "{name} must be a `number` type, but the final value was: `{shown}."
            ));
        }
    };

    if number.fract() != 0.0 || number < i32::MIN as f64 || number > i32::MAX as f64 {
        return Err(format!("{name} must be an integer"));
    }

    Ok(number as i32)
}

/// ISO 8601 strings or epoch milliseconds
fn parse_date(name: &str, value: &Value) -> Result<DateTime<Utc>, String> {
    let parsed = match value {
        Value::String(s) => parse_iso_date(s),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    };

    parsed.ok_or_else(|| type_error(name, "date", "Invalid Date"))
}

/// Parse an ISO 8601 date; inputs without an offset are taken as UTC
pub fn parse_iso_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
