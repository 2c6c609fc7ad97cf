use crate::prelude::*;
use clap::Parser;

mod cohere;
mod config;
mod error;
mod history;
mod prelude;
mod server;
mod summarize;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Structured topic research summaries backed by the Cohere chat API"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "DATASNIPER_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the HTML form and the /summarize JSON endpoint
    Serve(crate::server::App),

    /// Summarize one topic from the command line
    Summarize(crate::summarize::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(sub_app) => crate::server::run(sub_app, app.global).await,
        SubCommands::Summarize(sub_app) => crate::summarize::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
