//! Core library for datasniper
//!
//! This crate implements the **Functional Core** of the datasniper application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`datasniper_core`** (this crate): Pure transformation functions with zero I/O
//! - **`datasniper`**: HTTP server, Cohere client, log file and CLI (the Imperative Shell)
//!
//! Every function here is deterministic and can be tested with fixture strings,
//! no network or filesystem required.
//!
//! # Module Organization
//!
//! - [`summary`]: Prompt rendering, report schema, reply parsing and the report template
//! - [`cohere`]: Wire types for the Cohere chat API and their transformations
//! - [`history`]: Formatting of request log entries
//!
//! # Example Usage
//!
//! ```rust
//! use datasniper_core::summary::{build_prompt, parse_report, render_report, Language, Style};
//!
//! let prompt = build_prompt("borrow checker", Style::Report, Language::English);
//! assert!(prompt.contains("Brief Concept:"));
//!
//! let (report, _source) = parse_report(r#"{"concept": "Static ownership analysis."}"#);
//! let text = render_report("borrow checker", &report);
//! assert!(text.contains("Static ownership analysis."));
//! ```

pub mod cohere;
pub mod history;
pub mod summary;
