use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentinel substituted for any field the model's response did not carry.
pub const PARSE_ERROR: &str = "PARSE_ERROR";

/// Diseases the extractor may name; anything else maps to "Other".
pub const DISEASE_WHITELIST: [&str; 11] = [
    "Crimean-Congo Hemorrhagic fever",
    "Ebola",
    "Hantavirus Pulmonary Syndrome",
    "Hendra Virus",
    "Henipavirus",
    "Lassa Fever",
    "MERSCoV",
    "Marburg Hemorrhagic Fever",
    "Nipah Virus",
    "Yellow Fever",
    "Plague (Yersinia pestis)",
];

/// Partial article fields as delivered by the feed. Any of them may be
/// empty; none is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub translated: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "importDateUTC")]
    pub import_date_utc: String,
    #[serde(default)]
    pub locations: String,
}

/// Case count as reported by the model: a non-negative integer, or the
/// sentinel when the response carried no usable number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaseCount {
    Count(u64),
    Sentinel(String),
}

impl CaseCount {
    pub fn sentinel() -> Self {
        CaseCount::Sentinel(PARSE_ERROR.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRecord {
    pub disease: String,
    pub cases: CaseCount,
    pub time: String,
    pub location: String,
    pub country: String,
    pub reasons: HashMap<String, String>,
}

/// Outcome of one extraction call. `Unparsed` keeps the model's text so a
/// non-conforming response can still be inspected downstream.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ExtractionOutcome {
    Record(ExtractionRecord),
    Unparsed { error: String, raw: String },
}
