use std::sync::{Arc, Mutex};

use url::Url;

use crate::domain::AppError;
use crate::ports::ArchiveSource;

/// Serves a canned payload (or failure) and records requested URLs.
#[derive(Clone)]
pub struct FakeArchiveSource {
    pub requested: Arc<Mutex<Vec<Url>>>,
    payload: Result<Vec<u8>, u16>,
}

impl FakeArchiveSource {
    pub fn serving(payload: Vec<u8>) -> Self {
        Self { requested: Arc::new(Mutex::new(vec![])), payload: Ok(payload) }
    }

    pub fn failing(status: u16) -> Self {
        Self { requested: Arc::new(Mutex::new(vec![])), payload: Err(status) }
    }

    pub fn request_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }
}

impl ArchiveSource for FakeArchiveSource {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, AppError> {
        self.requested.lock().unwrap().push(url.clone());
        match &self.payload {
            Ok(bytes) => Ok(bytes.clone()),
            Err(status) => Err(AppError::Download {
                url: url.to_string(),
                message: format!("HTTP {}", status),
                status: Some(*status),
            }),
        }
    }
}
