use std::fmt;
use std::path::PathBuf;

/// Upstream and logging configuration, shared by every subcommand.
///
/// Built once by clap from flags and environment variables and passed down
/// explicitly; nothing reads the environment after startup.
#[derive(Clone, clap::Args)]
pub struct Config {
    /// Cohere API key
    #[clap(long, env = "COHERE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Cohere API base URL
    #[clap(long, env = "COHERE_BASE_URL", default_value = "https://api.cohere.com")]
    pub base_url: String,

    /// Model used for generation
    #[clap(long, env = "COHERE_MODEL", default_value = "command-r")]
    pub model: String,

    /// Sampling temperature
    #[clap(long, env = "COHERE_TEMPERATURE", default_value_t = 0.7)]
    pub temperature: f32,

    /// File every served request is appended to
    #[clap(long, env = "DATASNIPER_LOG_FILE", default_value = "queries.log")]
    pub log_file: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("log_file", &self.log_file)
            .finish()
    }
}

#[cfg(test)]
pub(crate) fn test_config(base_url: &str, log_file: PathBuf) -> Config {
    Config {
        api_key: "test-key".to_string(),
        base_url: base_url.to_string(),
        model: "command-r".to_string(),
        temperature: 0.7,
        log_file,
    }
}
