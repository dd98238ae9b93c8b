//! Archive download port definition.

use url::Url;

use crate::domain::AppError;

/// Port for retrieving a remote archive payload.
pub trait ArchiveSource {
    /// Download the archive at `url` and return its raw bytes.
    ///
    /// Implementations perform a single attempt; callers treat any error as fatal.
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, AppError>;
}
