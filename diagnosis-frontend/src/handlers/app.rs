use crate::view::{ResultRow, ViewState, SUBMIT_BUSY_LABEL};
use askama::Template;
use axum::response::IntoResponse;

/// What the diagnosis panel shows: input control, submit control, error
/// region and results list.
pub struct DiagnosisPanel {
    pub input: String,
    pub loading: bool,
    pub submit_label: &'static str,
    pub busy_label: &'static str,
    pub error: Option<String>,
    pub rows: Vec<ResultRow>,
}

impl From<&ViewState> for DiagnosisPanel {
    fn from(state: &ViewState) -> Self {
        Self {
            input: state.input.clone(),
            loading: state.loading,
            submit_label: state.submit_label(),
            busy_label: SUBMIT_BUSY_LABEL,
            error: state.error.clone(),
            rows: state.rows(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub panel: DiagnosisPanel,
}

#[derive(Template)]
#[template(path = "fragments/diagnosis_panel.html")]
pub struct DiagnosisPanelTemplate {
    pub panel: DiagnosisPanel,
}

pub async fn index() -> impl IntoResponse {
    IndexTemplate {
        panel: DiagnosisPanel::from(&ViewState::default()),
    }
}

pub async fn health_check() -> &'static str {
    "OK"
}
