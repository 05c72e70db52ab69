use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::info;

use crate::error::{ConjugationError, Result};

const TIMEOUT_SECS: u64 = 60;

/// Downloads the published spreadsheet export and stores the raw bytes.
///
/// Bytes are written as received so the encoding fallback of `convert`
/// still applies. No retries.
pub fn download(url: &str, output: &Path) -> Result<u64> {
    let client = Client::builder()
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()?;

    info!("downloading {url}");
    let bytes = client.get(url).send()?.error_for_status()?.bytes()?;

    fs::write(output, &bytes).map_err(|e| ConjugationError::io(output, e))?;
    info!("saved {} bytes to {}", bytes.len(), output.display());

    Ok(bytes.len() as u64)
}
