use crate::api::PortalApi;
use crate::config::Config;

/// Everything a request handler needs, shared read-only by all workers.
pub struct AppState {
    pub api: Box<dyn PortalApi>,
    pub config: Config,
}

impl AppState {
    pub fn new(api: Box<dyn PortalApi>, config: Config) -> Self {
        Self { api, config }
    }
}
