use serde_json::Value;

use crate::SummaryRequest;

/// List each event under the time-window header and ask for a severity
/// read. Follow-up questions are explicitly forbidden so the output can be
/// shown to an analyst verbatim.
pub fn build_summary_prompt(request: &SummaryRequest) -> String {
    let mut prompt = format!(
        "Summarize the following outbreak events for this time window:\n\nTime and Country: {}\n",
        request.time_key
    );

    for event in &request.events {
        prompt.push_str(&format!(
            "- {} | {} case(s) | {} | {}\n",
            event.disease,
            render_cases(&event.cases),
            event.location,
            event.country
        ));
    }

    prompt.push_str(
        "\nProvide a clear and concise summary of the events above. \
         Indicate if there is an outbreak occurring, in which area(s), and \
         how severe it is based on the number of cases. Do not include \
         follow-up suggestions or questions.",
    );

    prompt
}

/// Render the case count the way it arrived: a bare number, or the bare
/// text of a sentinel string.
fn render_cases(cases: &Value) -> String {
    match cases {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
