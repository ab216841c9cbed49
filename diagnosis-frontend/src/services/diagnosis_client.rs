use crate::config::DiagnosisApiConfig;
use crate::models::{DiagnoseRequest, DiagnosisReply};
use async_trait::async_trait;
use metrics::counter;
use reqwest::{Client, StatusCode};
use service_core::observability::TracedClientExt;
use thiserror::Error;

/// Path of the diagnosis endpoint, relative to the configured base address.
pub const DIAGNOSE_PATH: &str = "/api/diagnose";

#[derive(Debug, Error)]
pub enum DiagnosisClientError {
    #[error("failed to reach diagnosis service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("diagnosis service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed diagnosis response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl DiagnosisClientError {
    fn outcome(&self) -> &'static str {
        match self {
            DiagnosisClientError::Transport(_) => "transport_error",
            DiagnosisClientError::Status { .. } => "status_error",
            DiagnosisClientError::Malformed(_) => "malformed",
        }
    }

    /// The message followed by every underlying cause, `: `-separated.
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let cause_message = cause.to_string();
            if !detail.contains(&cause_message) {
                detail.push_str(": ");
                detail.push_str(&cause_message);
            }
            source = cause.source();
        }
        detail
    }
}

/// Remote diagnosis round trip.
#[async_trait]
pub trait DiagnosisApi: Send + Sync {
    /// Send one diagnosis request. `symptoms` is never empty.
    async fn diagnose(&self, symptoms: &[String]) -> Result<DiagnosisReply, DiagnosisClientError>;
}

pub struct DiagnosisClient {
    client: Client,
    settings: DiagnosisApiConfig,
}

impl DiagnosisClient {
    pub fn new(settings: DiagnosisApiConfig) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.settings.base_url.trim_end_matches('/'),
            DIAGNOSE_PATH
        )
    }

    async fn round_trip(&self, symptoms: &[String]) -> Result<DiagnosisReply, DiagnosisClientError> {
        let url = self.endpoint();
        let body = DiagnoseRequest {
            symptoms: symptoms.to_vec(),
        };

        let response = self
            .client
            .traced_post(&url)
            .json(&body)
            .send()
            .await
            .map_err(DiagnosisClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(text) => text,
                Err(_) => status.canonical_reason().unwrap_or_default().to_string(),
            };
            return Err(DiagnosisClientError::Status { status, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(DiagnosisClientError::Transport)?;
        let value: serde_json::Value = serde_json::from_slice(&bytes)?;

        Ok(DiagnosisReply::from_body(value)?)
    }
}

#[async_trait]
impl DiagnosisApi for DiagnosisClient {
    #[tracing::instrument(skip(self, symptoms), fields(symptom_count = symptoms.len()))]
    async fn diagnose(&self, symptoms: &[String]) -> Result<DiagnosisReply, DiagnosisClientError> {
        let result = self.round_trip(symptoms).await;

        let outcome = match &result {
            Ok(DiagnosisReply::Results(results)) => {
                tracing::info!(result_count = results.len(), "Diagnosis returned results");
                "results"
            }
            Ok(DiagnosisReply::NoResults { .. }) => {
                tracing::info!("Diagnosis returned no results");
                "no_results"
            }
            Err(e) => e.outcome(),
        };
        counter!("diagnosis_requests_total", "outcome" => outcome).increment(1);

        result
    }
}
