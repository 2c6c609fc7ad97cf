//! Heuristic section extraction for free-text model replies.
//!
//! Only used when the model ignores the requested JSON schema. Anchors are
//! keyword based and break on overlapping keywords or nested colons.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::prompt::CLOSING_PHRASE;
use super::types::{Report, PLACEHOLDER, SECTIONS};

/// Extract the text following the first matching alias.
///
/// Each alias is tried in order. An alias matches when it appears
/// case-insensitively as a word followed by a colon or dash (markdown
/// emphasis such as `**Tools**:` is tolerated). The capture runs until the
/// next line that looks like a heading or the end of the text.
///
/// Returns [`PLACEHOLDER`] when no alias matches or the capture is empty.
pub fn extract_section(text: &str, aliases: &[&str]) -> String {
    for alias in aliases {
        let Some(start) = find_anchor(text, alias) else {
            continue;
        };

        let rest = &text[start..];
        let end = next_heading(rest).unwrap_or(rest.len());
        let body = rest[..end].trim();

        return if body.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            capitalize(body)
        };
    }

    PLACEHOLDER.to_string()
}

/// Slice a free-text reply into a [`Report`].
pub fn extract_report(text: &str) -> Report {
    let text = text.replace(CLOSING_PHRASE, "");
    let [concept, applications, examples, tools, limitations] =
        SECTIONS.map(|section| extract_section(&text, section.aliases));

    Report {
        concept,
        applications,
        examples,
        tools,
        limitations,
    }
}

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n[ \t]*(?:#+[ \t]*)?\**\w+(?:[ \t]\w+)?\**[ \t]*(?::|-[ \t\r\n])")
        .expect("heading pattern is valid")
});

// One anchor per alias of the section table, compiled on first use.
static ANCHORS: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    SECTIONS
        .iter()
        .flat_map(|section| section.aliases.iter())
        .map(|alias| (*alias, anchor_pattern(alias)))
        .collect()
});

fn anchor_pattern(alias: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\**[ \t]*[:\-]", regex::escape(alias)))
        .expect("escaped alias is a valid pattern")
}

/// Byte offset right after `alias` and its colon/dash.
fn find_anchor(text: &str, alias: &str) -> Option<usize> {
    let found = match ANCHORS.get(alias) {
        Some(re) => re.find(text),
        None => anchor_pattern(alias).find(text),
    };
    found.map(|m| m.end())
}

/// Byte offset of the next line shaped like `Word:` / `Two words -`.
fn next_heading(text: &str) -> Option<usize> {
    HEADING.find(text).map(|m| m.start())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
