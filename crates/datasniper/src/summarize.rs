use crate::cohere::CohereClient;
use crate::config::Config;
use crate::prelude::{eprintln, println, *};
use datasniper_core::summary::{
    build_prompt, parse_report, render_report, report_schema, Language, ReportSource, Style,
};

#[derive(Debug, clap::Parser)]
#[command(name = "summarize")]
#[command(about = "Summarize a single topic and print the result")]
pub struct App {
    /// Topic or question to research
    pub query: String,

    /// Prompt style: report, brief, detailed, bullets, eli5
    #[clap(long, default_value = "report")]
    pub style: String,

    /// Reply language name or code (e.g. spanish, fr)
    #[clap(long, default_value = "english")]
    pub language: String,

    /// Do not append the result to the log file
    #[clap(long)]
    pub no_log: bool,

    #[clap(flatten)]
    pub config: Config,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let query = app.query.trim();
    if query.is_empty() {
        return Err(eyre!("{}", Error::MissingQuery));
    }

    let style = Style::parse_or_default(&app.style);
    let language = Language::parse_or_default(&app.language);
    let client = CohereClient::new(&app.config)?;

    if global.verbose {
        eprintln!("Model: {}", client.model());
        eprintln!("Style: {}", style.as_str());
        eprintln!("Language: {}", language.name());
    }

    let summary = summarize_data(&client, query, style, language).await?;

    if !app.no_log {
        crate::history::append_entry(&app.config.log_file, query, &summary).await?;
    }

    println!("{}", summary);

    Ok(())
}

/// Run one summarization and return the text sent back to the caller.
///
/// The report style asks the model for JSON matching the report schema and
/// renders it into the report template. Every other style is returned as the
/// model wrote it.
pub async fn summarize_data(
    client: &CohereClient,
    query: &str,
    style: Style,
    language: Language,
) -> Result<String> {
    let prompt = build_prompt(query, style, language);
    let schema = style.is_structured().then(report_schema);

    let reply = client
        .chat(&prompt, schema)
        .await
        .map_err(|e| eyre!("Cohere Error: {}", e))?;

    log::debug!("Raw reply ({} chars):\n{}", reply.len(), reply);

    if !style.is_structured() {
        return Ok(reply.trim().to_string());
    }

    let (report, source) = parse_report(&reply);
    if source == ReportSource::Heuristic {
        log::warn!("Model ignored the report schema, falling back to keyword extraction");
    }

    Ok(render_report(query, &report))
}
