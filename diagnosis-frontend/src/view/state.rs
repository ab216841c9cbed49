//! View state for one diagnosis page view.
//!
//! `DiagnosisView` holds the symptom input, the loading flag, the error
//! message and the result set, and drives the request lifecycle:
//! Idle -> Loading -> Idle with results, or Idle with an error.
//!
//! The state lock is never held across the network call, so the view can
//! be observed (and re-submitted) while a request is in flight. Each issued
//! request takes a generation number; a response that is no longer the
//! newest is dropped, and the newest request always clears `loading`.

use crate::models::{DiagnosisReply, DiagnosisResult};
use crate::services::DiagnosisApi;
use crate::view::format::ResultRow;
use crate::view::tokenize::tokenize_symptoms;
use std::sync::Arc;
use tokio::sync::RwLock;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter at least one symptom.";
pub const NO_RESULTS_MESSAGE: &str = "No results returned";
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to fetch diagnosis. Please check API connection.";

pub const SUBMIT_LABEL: &str = "Diagnose";
pub const SUBMIT_BUSY_LABEL: &str = "Diagnosing...";

/// Snapshot of everything the page renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub input: String,
    pub loading: bool,
    pub error: Option<String>,
    pub results: Vec<DiagnosisResult>,
}

impl ViewState {
    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn rows(&self) -> Vec<ResultRow> {
        self.results.iter().map(ResultRow::from).collect()
    }
}

#[derive(Default)]
struct Inner {
    state: ViewState,
    generation: u64,
}

#[derive(Clone)]
pub struct DiagnosisView {
    api: Arc<dyn DiagnosisApi>,
    inner: Arc<RwLock<Inner>>,
}

impl DiagnosisView {
    pub fn new(api: Arc<dyn DiagnosisApi>) -> Self {
        Self {
            api,
            inner: Arc::new(RwLock::new(Inner::default())),
        }
    }

    /// Replace the stored input verbatim.
    pub async fn update_input(&self, input: impl Into<String>) {
        self.inner.write().await.state.input = input.into();
    }

    pub async fn snapshot(&self) -> ViewState {
        self.inner.read().await.state.clone()
    }

    /// Tokenize the stored input and run one diagnosis round trip.
    ///
    /// Blank input sets the validation error and never reaches the network.
    /// Returns the view as it stands once this submission has settled.
    pub async fn submit(&self) -> ViewState {
        let (symptoms, generation) = {
            let mut inner = self.inner.write().await;
            inner.state.error = None;
            inner.state.results.clear();

            let symptoms = tokenize_symptoms(&inner.state.input);
            if symptoms.is_empty() {
                inner.state.error = Some(EMPTY_INPUT_MESSAGE.to_string());
                return inner.state.clone();
            }

            inner.generation += 1;
            inner.state.loading = true;
            (symptoms, inner.generation)
        };

        tracing::debug!(symptoms = ?symptoms, generation, "Submitting diagnosis request");
        let outcome = self.api.diagnose(&symptoms).await;

        if let Err(e) = &outcome {
            tracing::error!(error = %e.detail(), "Failed to fetch diagnosis");
        }

        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            tracing::debug!(
                generation,
                current = inner.generation,
                "Discarding stale diagnosis response"
            );
            return inner.state.clone();
        }

        match outcome {
            Ok(DiagnosisReply::Results(results)) => inner.state.results = results,
            Ok(DiagnosisReply::NoResults { message }) => {
                inner.state.error = Some(message.unwrap_or_else(|| NO_RESULTS_MESSAGE.to_string()))
            }
            Err(_) => inner.state.error = Some(REQUEST_FAILED_MESSAGE.to_string()),
        }
        inner.state.loading = false;

        inner.state.clone()
    }
}
