use crate::schema::ArticleFields;

/// Fixed extraction instruction: output schema, disease whitelist, and the
/// case-counting, date, and location policies the model must apply.
pub const SYSTEM_PROMPT: &str = r#"You are a strict information extractor. Your only task is to extract structured information from health-related news reports and provide reasoning.

Respond ONLY with a valid JSON object — no explanations or natural language outside the JSON.

The JSON must follow this structure:

{
  "Disease": "<name>",
  "Cases": <number>,
  "Time": "<ISO 8601 datetime>",
  "Location": "<specific location>",
  "Country" : "<name of the country>",
  "Reason": {
    "Disease": "<why you selected this disease>",
    "Cases": "<why you chose this case number>",
    "Time": "<why you selected this time>",
    "Location": "<why you selected this location>"
  }
}

Constraints:
- Only use one of these diseases: "Crimean-Congo Hemorrhagic fever", "Ebola", "Hantavirus Pulmonary Syndrome", "Hendra Virus", "Henipavirus", "Lassa Fever", "MERSCoV", "Marburg Hemorrhagic Fever", "Nipah Virus", "Yellow Fever", "Plague (Yersinia pestis)". If not listed, use "Other".
- Use 0 for Cases if undefined.
- Time must be in ISO 8601 format.
- Respond ONLY with the JSON object — no markdown, no formatting.
- Respond without ```json tag.
For Location:
Format location as either:

[City], [Country] (e.g., Paris, France), or

[Country] only (e.g., France).

If multiple locations are infected, only use the general location that coverage all.

Use the full official name of the country, not abbreviations or short forms.
Good: United States of America, Bad: U.S.
Be consistent with naming (e.g., use Peru, not Republic of Peru unless the official long name is required).

For Number of Cases:
If the article says "more than X cases", use X as the infection count.

If the article reports disease spreading between places, only count cases in the main location being reported on.
For example: "Bremen scientists infected with ebola after returning from South Africa".
Location will be Bremen, Germany
If no specific number of cases is mentioned, assume 1 case.

Prioritize current infection cases over death cases when both are mentioned.

If multiple case counts are given for different places (e.g., There are X in A, Y in B, Z in C), sum them up (X+Y+Z).

For Date:
If a date range is mentioned (e.g., June 1 to 5), use the end date (e.g., June 5).

If only a month is mentioned (e.g., June 2025), use the 1st day of that month (e.g., June 1, 2025)."#;

/// Marker closing the user message so a truncated feed is still delimited.
const END_MARKER: &str = "/the end.";

/// Assemble the user message: the four text fields each on their own line,
/// the import date, then the locations hint and the end marker. Empty fields
/// stay as empty lines; the builder never fails.
pub fn build_user_message(article: &ArticleFields) -> String {
    format!(
        "{}\n{}\n{}\n{}\nAnd This is the import date of the article {}\n{}{}",
        article.title,
        article.summary,
        article.translated,
        article.description,
        article.import_date_utc,
        article.locations,
        END_MARKER,
    )
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DISEASE_WHITELIST;

    #[test]
    fn empty_article_still_renders_a_delimited_message() {
        let message = build_user_message(&ArticleFields::default());

        assert!(!message.is_empty());
        assert!(message.ends_with(END_MARKER));
        assert!(message.contains("And This is the import date of the article"));
    }

    #[test]
    fn fields_appear_each_on_their_own_line() {
        let article = ArticleFields {
            title: "Ebola outbreak".to_string(),
            summary: "Five cases reported".to_string(),
            translated: "Cinq cas".to_string(),
            description: "Details follow".to_string(),
            import_date_utc: "2025-06-15T00:00:00.000Z".to_string(),
            locations: "Paris".to_string(),
        };

        let message = build_user_message(&article);
        let lines: Vec<&str> = message.lines().collect();

        assert_eq!(lines[0], "Ebola outbreak");
        assert_eq!(lines[1], "Five cases reported");
        assert_eq!(lines[2], "Cinq cas");
        assert_eq!(lines[3], "Details follow");
        assert!(lines[4].ends_with("2025-06-15T00:00:00.000Z"));
        assert_eq!(lines[5], "Paris/the end.");
    }

    #[test]
    fn instruction_names_every_whitelisted_disease() {
        for disease in DISEASE_WHITELIST {
            assert!(SYSTEM_PROMPT.contains(disease), "missing {disease}");
        }
        assert!(SYSTEM_PROMPT.contains(r#"If not listed, use "Other""#));
    }

    #[test]
    fn instruction_carries_case_counting_policy() {
        assert!(SYSTEM_PROMPT.contains("sum them up"));
        assert!(SYSTEM_PROMPT.contains("assume 1 case"));
        assert!(SYSTEM_PROMPT.contains("Prioritize current infection cases over death cases"));
    }

    #[test]
    fn instruction_carries_date_resolution_policy() {
        assert!(SYSTEM_PROMPT.contains("use the end date"));
        assert!(SYSTEM_PROMPT.contains("use the 1st day of that month"));
    }
}
