//! HTTP utilities for downloading toolchains.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Downloads `url` into `dest`, replacing any existing file.
///
/// The body is written chunk by chunk as it arrives. Non-success HTTP statuses
/// are errors; on failure `dest` may hold a partial download.
pub async fn download_to(url: &str, dest: &Path) -> Result<()> {
    log::info!("Downloading {}", url);

    let download_error = |reason: String| Error::Download {
        url: url.to_string(),
        reason,
    };

    let mut response = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| download_error(e.to_string()))?;

    let mut file = tokio::fs::File::create(dest)
        .await
        .fs_context("creating download", dest)?;

    let mut written = 0u64;
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| download_error(format!("failed to read response: {}", e)))?
    {
        file.write_all(&chunk)
            .await
            .fs_context("writing download", dest)?;
        written += chunk.len() as u64;
    }
    file.flush().await.fs_context("writing download", dest)?;

    log::debug!("Downloaded {} bytes to {}", written, dest.display());
    Ok(())
}
