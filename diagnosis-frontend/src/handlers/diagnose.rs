use crate::handlers::app::{DiagnosisPanel, DiagnosisPanelTemplate, IndexTemplate};
use crate::view::DiagnosisView;
use crate::AppState;
use askama::Template;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use service_core::error::AppError;

/// Header htmx sets on every request it issues.
const HX_REQUEST_HEADER: &str = "hx-request";

#[derive(Deserialize)]
pub struct DiagnoseForm {
    #[serde(default)]
    pub symptoms: String,
}

/// Run one diagnosis for the submitted text.
///
/// htmx requests get the diagnosis panel fragment back; plain form posts get
/// the whole page.
pub async fn diagnose_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<DiagnoseForm>,
) -> Result<Response, AppError> {
    let view = DiagnosisView::new(state.diagnosis_api.clone());
    view.update_input(form.symptoms).await;
    let snapshot = view.submit().await;

    tracing::info!(
        result_count = snapshot.results.len(),
        has_error = snapshot.error.is_some(),
        "Diagnosis submission settled"
    );

    let panel = DiagnosisPanel::from(&snapshot);
    let html = if is_htmx(&headers) {
        DiagnosisPanelTemplate { panel }.render()
    } else {
        IndexTemplate { panel }.render()
    }
    .map_err(|e| AppError::InternalError(e.into()))?;

    Ok(Html(html).into_response())
}

fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}
