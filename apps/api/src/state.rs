use std::sync::Arc;

use crate::admin::store::ProfileStore;
use crate::cv::store::CvStore;
use crate::templates::TemplateRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// CV documents. Default: PgCvStore.
    pub documents: Arc<dyn CvStore>,
    /// Admin-facing user profiles. Default: PgProfileStore.
    pub profiles: Arc<dyn ProfileStore>,
    /// Built once at startup; read-only afterwards.
    pub templates: Arc<TemplateRegistry>,
}
