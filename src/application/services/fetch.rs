//! Blog fetch service
//!
//! Ingestion is not implemented yet: the service validates the request and
//! reports what it would do.

use std::io::Write;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{render, ApplicationResult, OutputFormat, OutputOptions};
use crate::config::Settings;
use crate::domain::{FetchRequest, FetchResult};

/// Service for fetching blog posts and feeds.
pub struct FetchService {
    settings: Arc<Settings>,
}

impl FetchService {
    /// Create a new fetch service.
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    /// Validate the request and build its stub result.
    pub fn fetch(&self, request: &FetchRequest) -> ApplicationResult<FetchResult> {
        debug!(
            "fetch: url={:?} playlist={:?} out_dir={} analyze={}",
            request.url, request.playlist, request.out_dir, request.analyze
        );
        request.validate()?;
        if request.analyze {
            info!("fetch: analyzer workflows are not wired up, --analyze is recorded only");
        }
        Ok(FetchResult::stub(request))
    }

    /// Fetch, resolve the output format, then render to `out`.
    ///
    /// A missing source fails before the output flags are looked at, and a
    /// bad output flag fails before anything is written.
    pub fn run(
        &self,
        request: &FetchRequest,
        options: &OutputOptions,
        out: &mut dyn Write,
    ) -> ApplicationResult<OutputFormat> {
        let result = self.fetch(request)?;
        let format = options.resolve(&self.settings.output)?;
        render(&result, format, out)?;
        Ok(format)
    }
}
