use chrono::{Duration, NaiveDateTime};

use crate::Article;

/// Events older than this many days before the import date are stale.
const CUTOFF_LOOKBACK_DAYS: i64 = 14;

/// Earliest event date still considered timely, as YYYY-MM-DD. An
/// unparseable import timestamp yields an empty cutoff; the instruction's
/// skip-when-no-date rule then governs.
pub fn cutoff_date(import_date_utc: &str) -> String {
    match NaiveDateTime::parse_from_str(import_date_utc, "%Y-%m-%dT%H:%M:%S%.fZ") {
        Ok(imported) => (imported - Duration::days(CUTOFF_LOOKBACK_DAYS))
            .format("%Y-%m-%d")
            .to_string(),
        Err(_) => String::new(),
    }
}

/// Render the scrutinizer instruction and the article fields as a single
/// user message. Never fails; absent fields render as empty sections.
pub fn build_relevance_prompt(article: &Article) -> String {
    let after_date = cutoff_date(&article.import_date_utc);

    format!(
        r#"You will act as an expert scrutinizer who reads an article to determine whether it is relevant to an outbreak signal.

The article provided is not the full version. It includes partial sections extracted from a full article, consisting of the title, summary, translatedDescription, and description. Some parts may be null — you might receive only 2, 3, or all 4 sections — but that is sufficient to evaluate outbreak relevance.

Make your judgment only after carefully reading the entire content provided.

### Criteria for Determining Outbreak Relevance

#### 1. Disease and Location (Both are required):
1.1 The article **must mention a specific disease**, and it must be one of the 11 diseases listed below:
- Hantavirus Pulmonary Syndrome
- Crimean-Congo Hemorrhagic Fever
- Hendra Virus
- Ebola
- Marburg Hemorrhagic Fever
- Henipavirus
- Lassa Fever
- MERS-CoV
- Plague (Yersinia pestis)
- Nipah Virus
- Yellow Fever

Any disease not listed is considered **irrelevant**.

1.2 If only symptoms are mentioned (e.g., "10 people reportedly have a high fever"), this does **not** count as a relevant disease. Symptoms alone do not qualify.

1.3 A **specific location** must be mentioned, such as a country, province, city, or district (e.g., Thailand, Bremen, Salaya).
- 1.3.1 If the article refers to a **global** outbreak, that counts as relevant.
- 1.3.2 If the location is **too vague** (e.g., "a mountain" or "the ocean"), it is considered irrelevant.

1.4 Mention of **number of cases or affected population** is also required.
- Articles focused on indirect effects (e.g., "Ebola reduces stock prices by 20%") are irrelevant.
- Articles saying "no new cases in the past few weeks" do **not** count as relevant.
- If articles said, "no increase case" it doesn't count as a relevant.

#### 2. Timeliness
2.1 The article is only relevant if the event occurred **on or after** the date: **{after_date}**

2.2 Do **not** try to calculate date differences. Just compare the article's event date directly with the given cutoff.
- If the event happened **before** this date, mark it **irrelevant**
- If it happened **on or after** this date, continue checking other criteria

2.3 If **no date** is mentioned in the article, you can **skip** the time-checking criteria and decide based on the other fields.

### Output Format (Strict)
Respond in exactly this format:
[Relevant: 1/0, Reason: your explanation]

---------------

Here is the article:

Title: {title}
Summary: {summary}
TranslatedDescription: {translated}
Description: {description}"#,
        after_date = after_date,
        title = article.title,
        summary = article.summary,
        translated = article.translated,
        description = article.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutoff_is_fourteen_days_before_import_date() {
        assert_eq!(cutoff_date("2025-06-15T00:00:00.000Z"), "2025-06-01");
    }

    #[test]
    fn cutoff_crosses_month_boundaries() {
        assert_eq!(cutoff_date("2025-03-10T12:30:00.000Z"), "2025-02-24");
    }

    #[test]
    fn malformed_timestamp_yields_empty_cutoff() {
        assert_eq!(cutoff_date("not a date"), "");
        assert_eq!(cutoff_date(""), "");
        assert_eq!(cutoff_date("2025-06-15"), "");
    }

    #[test]
    fn prompt_carries_cutoff_and_article_fields() {
        let article = Article {
            title: "Ebola in Bremen".to_string(),
            summary: "Three confirmed cases".to_string(),
            translated: String::new(),
            description: "Details".to_string(),
            import_date_utc: "2025-06-15T00:00:00.000Z".to_string(),
        };

        let prompt = build_relevance_prompt(&article);

        assert!(prompt.contains("**2025-06-01**"));
        assert!(prompt.contains("Title: Ebola in Bremen"));
        assert!(prompt.contains("Summary: Three confirmed cases"));
        assert!(prompt.contains("[Relevant: 1/0, Reason: your explanation]"));
    }

    #[test]
    fn malformed_date_neutralizes_the_timeliness_cutoff() {
        let article = Article {
            import_date_utc: "garbage".to_string(),
            ..Article::default()
        };

        let prompt = build_relevance_prompt(&article);

        // Empty cutoff: the date slot renders blank and rule 2.3 governs.
        assert!(prompt.contains("on or after** the date: ****"));
        assert!(prompt.contains("you can **skip** the time-checking criteria"));
    }
}
