pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod view;

use services::DiagnosisApi;
use std::sync::Arc;

/// Shared application state: the client for the diagnosis backend.
#[derive(Clone)]
pub struct AppState {
    pub diagnosis_api: Arc<dyn DiagnosisApi>,
}

impl AppState {
    pub fn new(diagnosis_api: Arc<dyn DiagnosisApi>) -> Self {
        Self { diagnosis_api }
    }
}
