use std::sync::Arc;

use chrono::Duration;

use crate::company::source::{CompanyDataSource, PlaceholderCompanyData};
use crate::config::Config;
use crate::llm_client::ModelGateway;
use crate::workflow::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one model gateway every analyzer and generator is built on.
    pub gateway: Arc<dyn ModelGateway>,
    /// Company facts handed to every company analysis.
    pub company_source: Arc<dyn CompanyDataSource>,
    /// Workflow sessions, kept in memory only.
    pub sessions: SessionStore,
    pub config: Config,
}

impl AppState {
    pub fn new(gateway: Arc<dyn ModelGateway>, config: Config) -> Self {
        Self {
            gateway,
            company_source: Arc::new(PlaceholderCompanyData),
            sessions: SessionStore::new(Duration::seconds(i64::from(config.session_ttl_secs))),
            config,
        }
    }
}
