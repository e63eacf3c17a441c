use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::DocumentService;
use crate::presentation::config::UploadSettings;

pub struct AppState<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    pub document_service: Arc<DocumentService<F, L>>,
    pub upload: Arc<UploadSettings>,
}

impl<F, L> AppState<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    pub fn new(document_service: Arc<DocumentService<F, L>>, upload: UploadSettings) -> Self {
        Self {
            document_service,
            upload: Arc::new(upload),
        }
    }
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            document_service: Arc::clone(&self.document_service),
            upload: Arc::clone(&self.upload),
        }
    }
}
