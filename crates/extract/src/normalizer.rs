use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::schema::{CaseCount, ExtractionRecord, PARSE_ERROR};

/// Map the model's JSON object into a record, field by field. A missing or
/// unusable key degrades to the sentinel; it never invalidates the rest of
/// the record.
pub fn normalize_record(data: &Map<String, Value>) -> ExtractionRecord {
    ExtractionRecord {
        disease: text_field(data, "Disease"),
        cases: case_field(data),
        time: text_field(data, "Time"),
        location: text_field(data, "Location"),
        country: text_field(data, "Country"),
        reasons: reason_map(data.get("Reason")),
    }
}

fn text_field(data: &Map<String, Value>, key: &str) -> String {
    match data.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => PARSE_ERROR.to_string(),
    }
}

fn case_field(data: &Map<String, Value>) -> CaseCount {
    match data.get("Cases").and_then(Value::as_u64) {
        Some(count) => CaseCount::Count(count),
        None => CaseCount::sentinel(),
    }
}

fn reason_map(value: Option<&Value>) -> HashMap<String, String> {
    match value {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), text)
            })
            .collect(),
        _ => HashMap::new(),
    }
}
