use super::types::{Language, Style, SECTIONS};

/// Phrase the model is asked to close a report with.
pub const CLOSING_PHRASE: &str = "Tell me more about what you want to know next!";

/// Build the instruction sent to the model for a topic.
///
/// Pure and deterministic: the same topic, style and language always render
/// the same bytes.
pub fn build_prompt(topic: &str, style: Style, language: Language) -> String {
    let topic = topic.trim();

    let mut prompt = match style {
        Style::Report => report_prompt(topic),
        Style::Brief => format!(
            "Summarize the topic \"{topic}\" in 3-4 plain sentences.\n\
             Do not use headings, lists, or introductions."
        ),
        Style::Detailed => format!(
            "Write an in-depth explanation of the topic \"{topic}\".\n\
             Cover the core idea, how it works, where it is used, and its trade-offs.\n\
             Use short paragraphs and no more than 400 words."
        ),
        Style::Bullets => format!(
            "List the 5-7 most important points about the topic \"{topic}\".\n\
             Use one bullet per line, each starting with '- '. No introduction."
        ),
        Style::Eli5 => format!(
            "Explain the topic \"{topic}\" as if to a curious five-year-old.\n\
             Use simple words, one everyday analogy, and at most 5 sentences."
        ),
    };

    if language != Language::English {
        prompt.push_str("\n\n");
        prompt.push_str(&format!("Write the entire response in {}.", language.name()));
        if style.is_structured() {
            prompt.push_str(" Keep the section headings and JSON keys in English.");
        }
    }

    prompt
}

fn report_prompt(topic: &str) -> String {
    let headings = SECTIONS
        .iter()
        .map(|section| format!("{}:", section.heading))
        .collect::<Vec<_>>()
        .join("\n");

    let keys = SECTIONS
        .iter()
        .map(|section| section.key)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are a structured AI researcher assistant.\n\
         \n\
         Given the query: \"{topic}\", generate a structured response with EXACTLY these {count} headings in this order:\n\
         \n\
         {headings}\n\
         \n\
         Instructions:\n\
         - Use only one short paragraph per section.\n\
         - In Applications, Tools, and Limitations sections, use 3-5 clear bullet points instead of a paragraph.\n\
         - Do not add introductions or summaries.\n\
         - After the 'Limitations' section, end the response with this phrase exactly: '{CLOSING_PHRASE}'\n\
         - When a JSON object is requested, use the keys {keys} and put each section's text in its key.\n\
         \n\
         Output must be clean, minimal, and consistently formatted.",
        count = SECTIONS.len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_prompt_lists_headings_in_order() {
        let prompt = build_prompt("Rust ownership", Style::Report, Language::English);

        assert!(prompt.contains("Given the query: \"Rust ownership\""));
        assert!(prompt.contains(
            "Brief Concept:\nApplications:\nExamples:\nTools:\nLimitations:"
        ));
        assert!(prompt.contains(CLOSING_PHRASE));
        assert!(prompt.contains("EXACTLY these 5 headings"));
    }

    #[test]
    fn test_prompt_is_byte_identical_across_calls() {
        for style in Style::ALL {
            for language in Language::ALL {
                let first = build_prompt("vector databases", style, language);
                let second = build_prompt("vector databases", style, language);
                assert_eq!(first, second, "{style:?}/{language:?}");
            }
        }
    }

    #[test]
    fn test_topic_is_trimmed() {
        assert_eq!(
            build_prompt("  graph theory \n", Style::Brief, Language::English),
            build_prompt("graph theory", Style::Brief, Language::English)
        );
    }

    #[test]
    fn test_english_adds_no_language_instruction() {
        let prompt = build_prompt("tcp", Style::Bullets, Language::English);
        assert!(!prompt.contains("Write the entire response in"));
    }

    #[test]
    fn test_non_english_report_keeps_headings_in_english() {
        let prompt = build_prompt("tcp", Style::Report, Language::Spanish);
        assert!(prompt.ends_with(
            "Write the entire response in Spanish. Keep the section headings and JSON keys in English."
        ));
    }

    #[test]
    fn test_non_english_passthrough_style() {
        let prompt = build_prompt("tcp", Style::Eli5, Language::Hindi);
        assert!(prompt.starts_with("Explain the topic \"tcp\""));
        assert!(prompt.ends_with("Write the entire response in Hindi."));
    }

    #[test]
    fn test_unknown_style_renders_report_template() {
        let style = Style::parse_or_default("sonnet");
        assert_eq!(
            build_prompt("compilers", style, Language::English),
            build_prompt("compilers", Style::Report, Language::English)
        );
    }
}
