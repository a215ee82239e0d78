use serde_json::Value;

use crate::normalizer;
use crate::schema::ExtractionOutcome;

/// Strip one leading ```json / ``` fence and one trailing ``` fence. Models
/// wrap JSON in a fenced block often enough that this is the common path.
fn strip_code_fences(text: &str) -> &str {
    let mut content = text.trim();

    let json_fence = content
        .get(..7)
        .map(|prefix| prefix.eq_ignore_ascii_case("```json"))
        .unwrap_or(false);

    if json_fence {
        content = content[7..].trim_start();
    } else if let Some(rest) = content.strip_prefix("```") {
        content = rest.trim_start();
    }

    if let Some(rest) = content.strip_suffix("```") {
        content = rest.trim_end();
    }

    content
}

/// Parse the model's text into an extraction outcome. Never panics and
/// never returns an error: non-JSON input becomes `Unparsed` with the text
/// preserved, and missing fields degrade per-field inside the record.
pub fn parse_extraction(raw: &str) -> ExtractionOutcome {
    let content = strip_code_fences(raw);

    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(data)) => ExtractionOutcome::Record(normalizer::normalize_record(&data)),
        Ok(_) => ExtractionOutcome::Unparsed {
            error: "Failed to parse response: expected a JSON object".to_string(),
            raw: content.to_string(),
        },
        Err(e) => ExtractionOutcome::Unparsed {
            error: format!("Failed to parse response: {e}"),
            raw: content.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CaseCount, PARSE_ERROR};

    const CLEAN: &str = r#"{"Disease":"Ebola","Cases":5,"Time":"2025-06-05T00:00:00Z","Location":"Paris, France","Country":"France","Reason":{"Disease":"named directly in the title"}}"#;

    fn record(outcome: ExtractionOutcome) -> crate::schema::ExtractionRecord {
        match outcome {
            ExtractionOutcome::Record(record) => record,
            ExtractionOutcome::Unparsed { error, .. } => panic!("unexpected failure: {error}"),
        }
    }

    #[test]
    fn clean_json_parses_without_sentinels() {
        let record = record(parse_extraction(CLEAN));

        assert_eq!(record.disease, "Ebola");
        assert_eq!(record.cases, CaseCount::Count(5));
        assert_eq!(record.time, "2025-06-05T00:00:00Z");
        assert_eq!(record.location, "Paris, France");
        assert_eq!(record.country, "France");
        assert_eq!(
            record.reasons.get("Disease").map(String::as_str),
            Some("named directly in the title")
        );
    }

    #[test]
    fn fenced_json_parses_identically_to_unfenced() {
        let fenced = format!("```json\n{CLEAN}\n```");
        let record = record(parse_extraction(&fenced));
        assert_eq!(record.disease, "Ebola");
        assert_eq!(record.cases, CaseCount::Count(5));
    }

    #[test]
    fn fence_marker_is_case_insensitive() {
        let fenced = format!("```JSON\n{CLEAN}\n```");
        assert_eq!(record(parse_extraction(&fenced)).disease, "Ebola");
    }

    #[test]
    fn bare_fence_is_stripped_too() {
        let fenced = format!("```\n{CLEAN}\n```");
        assert_eq!(record(parse_extraction(&fenced)).country, "France");
    }

    #[test]
    fn non_json_text_degrades_to_unparsed_with_raw_preserved() {
        match parse_extraction("I cannot comply with that request.") {
            ExtractionOutcome::Unparsed { error, raw } => {
                assert!(error.starts_with("Failed to parse response:"));
                assert_eq!(raw, "I cannot comply with that request.");
            }
            ExtractionOutcome::Record(_) => panic!("expected unparsed outcome"),
        }
    }

    #[test]
    fn json_array_is_not_a_record() {
        assert!(matches!(
            parse_extraction("[1, 2, 3]"),
            ExtractionOutcome::Unparsed { .. }
        ));
    }

    #[test]
    fn missing_keys_degrade_to_sentinels_per_field() {
        let record = record(parse_extraction(r#"{"Disease":"Ebola"}"#));

        assert_eq!(record.disease, "Ebola");
        assert_eq!(record.cases, CaseCount::sentinel());
        assert_eq!(record.time, PARSE_ERROR);
        assert_eq!(record.location, PARSE_ERROR);
        assert_eq!(record.country, PARSE_ERROR);
        assert!(record.reasons.is_empty());
    }

    #[test]
    fn non_integer_cases_degrade_to_the_sentinel() {
        let record_five = record(parse_extraction(r#"{"Cases":"five"}"#));
        assert_eq!(record_five.cases, CaseCount::sentinel());

        let record_neg = record(parse_extraction(r#"{"Cases":-3}"#));
        assert_eq!(record_neg.cases, CaseCount::sentinel());
    }
}
