use std::sync::Arc;

use crate::config::Config;
use crate::layout::PageConfig;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single owner of the resume document.
    pub store: Arc<ResumeStore>,
    pub config: Config,
    /// Page geometry used to paginate exports (A4 at 72 DPI).
    pub page_config: PageConfig,
}
