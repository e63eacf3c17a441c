use std::time::Duration;

use crate::application::ports::FileLoaderError;

pub(crate) const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs a parser on the blocking pool. A parser panic surfaces as a join error and a slow
/// parser as a timeout; both become `ExtractionFailed`.
pub(crate) async fn run_parser<T, P>(label: &'static str, parse: P) -> Result<T, FileLoaderError>
where
    T: Send + 'static,
    P: FnOnce() -> Result<T, FileLoaderError> + Send + 'static,
{
    tokio::time::timeout(EXTRACTION_TIMEOUT, tokio::task::spawn_blocking(parse))
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed(format!("{label} extraction timed out")))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("{label} parser aborted: {e}")))?
}
