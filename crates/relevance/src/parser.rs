use regex::Regex;
use serde::Serialize;

/// Verdict for one article. `relevant` is the oracle's 0/1 flag; anything
/// the grammars cannot read fails closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelevanceVerdict {
    pub relevant: u8,
    pub reason: String,
}

impl RelevanceVerdict {
    /// Fail-closed verdict carrying the unreadable text as diagnostic.
    pub fn fail_closed(raw: &str) -> Self {
        Self {
            relevant: 0,
            reason: format!("Failed to parse response: {raw}"),
        }
    }
}

/// Parse the model's verdict line. Candidate grammars are tried in priority
/// order: the strict bracketed form first, then a relaxed form tolerating a
/// line break between the flag and the reason. First match wins; no match
/// fails closed.
pub fn parse_verdict(raw: &str) -> RelevanceVerdict {
    let strict =
        Regex::new(r"(?s)\[\s*[Rr]elevant\s*:\s*(1|0)\s*,\s*[Rr]eason\s*:\s*(.*?)\s*\]").unwrap();
    let relaxed = Regex::new(r"(?s)[Rr]elevant\s*:\s*(1|0)\s*\n?[Rr]eason\s*:\s*(.*)").unwrap();

    let captures = strict.captures(raw).or_else(|| relaxed.captures(raw));

    match captures {
        Some(caps) => RelevanceVerdict {
            relevant: if &caps[1] == "1" { 1 } else { 0 },
            reason: caps[2].trim().to_string(),
        },
        None => RelevanceVerdict::fail_closed(raw),
    }
}
