/// Record normalization: raw provider page → [`Item`].
///
/// A property missing or carrying an unexpected type reads as "no value".
/// Only a record without an id or properties, or a value of the right type
/// that cannot be read, fails normalization.
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::ItemSchema;
use crate::model::{Item, RichText};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    #[error("record has no id")]
    MissingId,
    #[error("record has no properties")]
    MissingProperties,
    #[error("property {property:?} holds an unreadable date {value:?}")]
    InvalidDate { property: String, value: String },
    #[error("property {property:?} is malformed: {reason}")]
    Malformed { property: String, reason: String },
}

/// Read the item metadata out of a page record.
pub fn item_metadata(record: &Value, schema: &ItemSchema) -> Result<Item, NormalizeError> {
    let id = record
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or(NormalizeError::MissingId)?;
    let properties = record
        .get("properties")
        .and_then(Value::as_object)
        .ok_or(NormalizeError::MissingProperties)?;

    Ok(Item {
        id: id.to_string(),
        title: title(properties, &schema.title),
        date: date(properties, &schema.date)?,
        location: location(properties, &schema.location)?,
        publish: publish(properties, &schema.publish),
    })
}

/// The id of a record, when it has one. Used to label dropped records.
pub fn record_id(record: &Value) -> Option<String> {
    record.get("id").and_then(Value::as_str).map(str::to_string)
}

/// Parse an ISO 8601 date or date-time. Bare dates are taken as midnight UTC.
pub fn parse_date(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time);
    }
    // Offset-less date-times arrive alongside a separate `time_zone` field.
    // The wall-clock value is kept and read as UTC.
    let local = LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })?;
    Some(local.and_utc().fixed_offset())
}

const LOCAL_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Payload of a property if it has the expected type, e.g. `{"type": "date", "date": {...}}`.
fn typed<'a>(properties: &'a Map<String, Value>, name: &str, expected: &str) -> Option<&'a Value> {
    let property = properties.get(name)?;
    if property.get("type").and_then(Value::as_str) != Some(expected) {
        return None;
    }
    property.get(expected)
}

fn title(properties: &Map<String, Value>, name: &str) -> Option<String> {
    typed(properties, name, "title")?
        .as_array()?
        .first()?
        .get("plain_text")?
        .as_str()
        .filter(|title| !title.is_empty())
        .map(str::to_string)
}

fn date(
    properties: &Map<String, Value>,
    name: &str,
) -> Result<Option<DateTime<FixedOffset>>, NormalizeError> {
    let Some(start) = typed(properties, name, "date")
        .and_then(|date| date.get("start"))
        .and_then(Value::as_str)
    else {
        return Ok(None);
    };

    parse_date(start)
        .map(Some)
        .ok_or_else(|| NormalizeError::InvalidDate {
            property: name.to_string(),
            value: start.to_string(),
        })
}

fn location(
    properties: &Map<String, Value>,
    name: &str,
) -> Result<Option<Vec<RichText>>, NormalizeError> {
    let Some(runs) = typed(properties, name, "rich_text") else {
        return Ok(None);
    };

    let runs: Vec<RichText> =
        serde_json::from_value(runs.clone()).map_err(|e| NormalizeError::Malformed {
            property: name.to_string(),
            reason: e.to_string(),
        })?;
    Ok((!runs.is_empty()).then_some(runs))
}

fn publish(properties: &Map<String, Value>, name: &str) -> bool {
    typed(properties, name, "checkbox")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
