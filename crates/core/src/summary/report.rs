use serde_json::{json, Map, Value};

use super::extract::extract_report;
use super::types::{Report, SECTIONS};

/// Where a parsed [`Report`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSource {
    /// The reply was a JSON object matching [`report_schema`].
    Structured,
    /// The reply was free text and went through the keyword extractor.
    Heuristic,
}

/// JSON schema the model is asked to fill for a report.
pub fn report_schema() -> Value {
    let properties: Map<String, Value> = SECTIONS
        .iter()
        .map(|section| {
            (
                section.key.to_string(),
                json!({ "type": "string", "description": section.description }),
            )
        })
        .collect();

    let required: Vec<&str> = SECTIONS.iter().map(|section| section.key).collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Turn a model reply into a [`Report`].
///
/// JSON objects (optionally wrapped in markdown fences, with or without
/// leading commentary) are decoded directly. Keys are matched against each
/// section's key, heading and aliases in any case. Anything else, including
/// an object with no usable section, falls back to [`extract_report`].
pub fn parse_report(reply: &str) -> (Report, ReportSource) {
    match decode_report(strip_fences(reply)) {
        Some(report) => (report, ReportSource::Structured),
        None => (extract_report(reply), ReportSource::Heuristic),
    }
}

fn decode_report(body: &str) -> Option<Report> {
    let object: Map<String, Value> = serde_json::from_str(body).ok()?;

    let canonical: Map<String, Value> = SECTIONS
        .iter()
        .filter_map(|section| {
            object
                .iter()
                .find(|(label, _)| section.matches_label(label))
                .map(|(_, value)| (section.key.to_string(), value.clone()))
        })
        .collect();

    let report = serde_json::from_value::<Report>(Value::Object(canonical))
        .ok()?
        .normalized();

    (!report.is_empty()).then_some(report)
}

/// Render a report into the fixed text template.
pub fn render_report(topic: &str, report: &Report) -> String {
    format!(
        "\n=== DATASNIPER.LOG ===\n\
         \n\
         🧠Topic:\n{topic}\n\
         \n\
         📘Brief Info:\n{concept}\n\
         \n\
         💡Applications:\n{applications}\n\
         \n\
         🧪Examples:\n{examples}\n\
         \n\
         🛠️Tools:\n{tools}\n\
         \n\
         ⚠️Limitations:\n{limitations}\n",
        topic = topic.trim(),
        concept = report.concept,
        applications = report.applications,
        examples = report.examples,
        tools = report.tools,
        limitations = report.limitations,
    )
    .trim()
    .to_string()
}

/// Isolate the JSON body of a reply.
///
/// Takes the contents of the first ``` fence when there is one, otherwise the
/// span from the first `{` to the last `}`.
fn strip_fences(reply: &str) -> &str {
    let text = reply.trim();

    if let Some(start) = text.find("```") {
        let rest = &text[start + "```".len()..];
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        let end = rest.find("```").unwrap_or(rest.len());
        return rest[..end].trim();
    }

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}
