// Download the gzip CSV sources and decode them as a stream
use flate2::read::GzDecoder;
use nbhdfit_core::{Error, Result};
use std::io::Cursor;
use std::time::Duration;
use tracing::info;

/// Download `url` in one request. Any non-success status is an error; there is no retry.
pub async fn fetch(url: &str, timeout: Duration) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::Fetch(format!("Failed to build HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Fetch(format!("Failed to download {}: {}", url, e)))?;

    if !response.status().is_success() {
        return Err(Error::Fetch(format!(
            "Failed to download {}: HTTP {}",
            url,
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Fetch(format!("Failed to read body of {}: {}", url, e)))?;

    info!("Downloaded {} bytes from {}", bytes.len(), url);
    Ok(Vec::from(bytes))
}

/// Streaming gzip decoder over a downloaded payload
pub type GzTable = GzDecoder<Cursor<Vec<u8>>>;

/// Wrap compressed bytes in a decoder that inflates while the CSV reader pulls.
///
/// Malformed gzip data surfaces as a CSV read error.
pub fn gzip_reader(bytes: Vec<u8>) -> GzTable {
    GzDecoder::new(Cursor::new(bytes))
}

/// Download a gzip CSV and return a reader over its decompressed contents
pub async fn fetch_table(url: &str, timeout: Duration) -> Result<GzTable> {
    let raw = fetch(url, timeout).await?;
    Ok(gzip_reader(raw))
}
