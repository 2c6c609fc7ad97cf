pub mod extract;
pub mod prompt;
pub mod report;
pub mod types;

pub use extract::{extract_report, extract_section};
pub use prompt::{build_prompt, CLOSING_PHRASE};
pub use report::{parse_report, render_report, report_schema, ReportSource};
pub use types::{Language, Report, Section, Style, PLACEHOLDER, SECTIONS};
