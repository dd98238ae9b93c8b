use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::info;
use url::Url;

use crate::adapters::zip_extractor::{ExtractionSummary, extract_archive};
use crate::domain::AppError;
use crate::ports::ArchiveSource;

/// Result of downloading and unpacking the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Payload size in bytes.
    pub size: usize,
    /// Hex SHA-256 of the payload, reported for the operator's reference.
    pub sha256: String,
    pub extraction: ExtractionSummary,
}

/// Download the archive once and expand it into `destination`.
pub fn execute(
    source: &impl ArchiveSource,
    url: &Url,
    destination: &Path,
) -> Result<FetchOutcome, AppError> {
    info!(%url, "downloading archive");
    let payload = source.fetch(url)?;

    let sha256 = digest_hex(&payload);
    info!(bytes = payload.len(), %sha256, "archive downloaded");

    let extraction = extract_archive(&payload, destination)?;
    info!(
        entries = extraction.entries(),
        skipped = extraction.skipped,
        destination = %destination.display(),
        "archive extracted"
    );

    Ok(FetchOutcome { size: payload.len(), sha256, extraction })
}

fn digest_hex(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
