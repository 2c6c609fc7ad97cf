use crate::prelude::*;
use datasniper_core::history::format_entry;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Append a served request to the log file, creating it if needed.
pub async fn append_entry(path: &Path, query: &str, output: &str) -> Result<()> {
    let entry = format_entry(&chrono::Local::now(), query, output);

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

    file.write_all(entry.as_bytes())
        .await
        .with_context(|| format!("Failed to write log file '{}'", path.display()))?;
    file.flush().await?;

    Ok(())
}
