use crate::config::Config;

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Serve the summary form and JSON endpoint over HTTP")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "DATASNIPER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[clap(flatten)]
    pub config: Config,
}
