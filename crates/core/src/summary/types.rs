use serde::{Deserialize, Deserializer, Serialize};

use super::prompt::CLOSING_PHRASE;

/// Placeholder used for any report section the model did not provide.
pub const PLACEHOLDER: &str = "Not available.";

/// Prompt phrasing selector.
///
/// `Report` is the only style whose reply is reshaped into sections; every
/// other style is passed through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Report,
    Brief,
    Detailed,
    Bullets,
    Eli5,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Report,
        Style::Brief,
        Style::Detailed,
        Style::Bullets,
        Style::Eli5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Report => "report",
            Style::Brief => "brief",
            Style::Detailed => "detailed",
            Style::Bullets => "bullets",
            Style::Eli5 => "eli5",
        }
    }

    /// Parse a style tag, falling back to [`Style::Report`] for anything unknown.
    pub fn parse_or_default(value: &str) -> Self {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(value))
            .unwrap_or_default()
    }

    /// Whether the reply should be reshaped into a [`Report`].
    pub fn is_structured(&self) -> bool {
        matches!(self, Style::Report)
    }
}

/// Reply language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Portuguese,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Portuguese,
        Language::Hindi,
    ];

    /// Human readable name, as used inside prompts.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Portuguese => "Portuguese",
            Language::Hindi => "Hindi",
        }
    }

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Portuguese => "pt",
            Language::Hindi => "hi",
        }
    }

    /// Parse a language name or code, falling back to [`Language::English`].
    pub fn parse_or_default(value: &str) -> Self {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|lang| {
                lang.name().eq_ignore_ascii_case(value) || lang.code().eq_ignore_ascii_case(value)
            })
            .unwrap_or_default()
    }
}

/// A labeled section of the report and the keywords that anchor it in free text.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// JSON key of the section in a structured reply.
    pub key: &'static str,
    /// Heading the model is asked to write.
    pub heading: &'static str,
    /// Case-insensitive anchors, tried in order.
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

impl Section {
    /// Whether a JSON key names this section (key, heading or alias, any case).
    pub fn matches_label(&self, label: &str) -> bool {
        let label = label.trim().trim_end_matches(':');
        self.key.eq_ignore_ascii_case(label)
            || self.heading.eq_ignore_ascii_case(label)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(label))
    }
}

/// Report sections, in the order the model is asked to produce them.
pub const SECTIONS: [Section; 5] = [
    Section {
        key: "concept",
        heading: "Brief Concept",
        aliases: &["brief concept", "concept"],
        description: "One short paragraph explaining the topic.",
    },
    Section {
        key: "applications",
        heading: "Applications",
        aliases: &["applications"],
        description: "3-5 bullet points, one per line, each starting with '- '.",
    },
    Section {
        key: "examples",
        heading: "Examples",
        aliases: &["examples"],
        description: "One short paragraph with concrete examples.",
    },
    Section {
        key: "tools",
        heading: "Tools",
        aliases: &["tools", "libraries"],
        description: "3-5 bullet points, one per line, each starting with '- '.",
    },
    Section {
        key: "limitations",
        heading: "Limitations",
        aliases: &["limitations"],
        description: "3-5 bullet points, one per line, each starting with '- '.",
    },
];

/// Sectioned research report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, deserialize_with = "text_or_list")]
    pub concept: String,
    #[serde(default, deserialize_with = "text_or_list")]
    pub applications: String,
    #[serde(default, deserialize_with = "text_or_list")]
    pub examples: String,
    #[serde(default, deserialize_with = "text_or_list")]
    pub tools: String,
    #[serde(default, deserialize_with = "text_or_list")]
    pub limitations: String,
}

impl Report {
    /// Trim every section, drop the closing phrase and replace blank sections
    /// with [`PLACEHOLDER`].
    pub fn normalized(self) -> Self {
        fn fill(text: String) -> String {
            let text = text.replace(CLOSING_PHRASE, "");
            let text = text.trim();
            if text.is_empty() {
                PLACEHOLDER.to_string()
            } else {
                text.to_string()
            }
        }

        Self {
            concept: fill(self.concept),
            applications: fill(self.applications),
            examples: fill(self.examples),
            tools: fill(self.tools),
            limitations: fill(self.limitations),
        }
    }

    /// True when no section carries any content.
    pub fn is_empty(&self) -> bool {
        [
            &self.concept,
            &self.applications,
            &self.examples,
            &self.tools,
            &self.limitations,
        ]
        .iter()
        .all(|text| text.trim().is_empty() || text.as_str() == PLACEHOLDER)
    }
}

// Models sometimes answer bullet sections with a JSON array even when the
// schema asks for a string.
fn text_or_list<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrList {
        Text(String),
        List(Vec<String>),
    }

    Ok(match Option::<TextOrList>::deserialize(deserializer)? {
        Some(TextOrList::Text(text)) => text,
        Some(TextOrList::List(items)) => items
            .iter()
            .map(|item| format!("- {}", item.trim().trim_start_matches("- ")))
            .collect::<Vec<_>>()
            .join("\n"),
        None => String::new(),
    })
}
