use crate::preview::PreviewService;

/// Shared application state passed to all handlers.
/// The cache store and HTTP client live inside the preview service and are
/// built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub previews: PreviewService,
}
