//! Domain entities: fetch request and its stub result

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Default destination directory for fetched content.
pub const DEFAULT_OUT_DIR: &str = "docs/research-external/blog";

/// Status reported while ingestion is not implemented.
pub const STATUS_STUB: &str = "stub";

/// Next phase announced in every stub result.
pub const NEXT_STEP: &str = "Phase 2 ingestion pipeline";

/// What the user asked `fetch` to do.
///
/// An empty `url` or `playlist` means the flag was not given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Article URL to fetch
    pub url: String,
    /// Playlist/feed file to ingest
    pub playlist: String,
    /// Destination directory for fetched content
    pub out_dir: String,
    /// Send fetched content into analyzer workflows (recorded, not acted upon)
    pub analyze: bool,
}

impl FetchRequest {
    /// Build a request from optional flag values.
    pub fn new(
        url: Option<String>,
        playlist: Option<String>,
        out_dir: impl Into<String>,
        analyze: bool,
    ) -> Self {
        Self {
            url: url.unwrap_or_default(),
            playlist: playlist.unwrap_or_default(),
            out_dir: out_dir.into(),
            analyze,
        }
    }

    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }

    pub fn has_playlist(&self) -> bool {
        !self.playlist.is_empty()
    }

    /// At least one source must be present.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.has_url() && !self.has_playlist() {
            return Err(DomainError::missing_source());
        }
        Ok(())
    }
}

/// Summary of what a fetch would do.
///
/// Field order is the serialization order for every output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub url: String,
    pub playlist: String,
    pub out_dir: String,
    pub analyze: bool,
    pub status: String,
    pub next_step: String,
}

impl FetchResult {
    /// Placeholder result echoing the request.
    pub fn stub(request: &FetchRequest) -> Self {
        Self {
            url: request.url.clone(),
            playlist: request.playlist.clone(),
            out_dir: request.out_dir.clone(),
            analyze: request.analyze,
            status: STATUS_STUB.into(),
            next_step: NEXT_STEP.into(),
        }
    }
}
