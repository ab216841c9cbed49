use crate::models::DiagnosisResult;

/// Condition name for display: `common_cold` becomes `common cold`.
pub fn display_name(disease: &str) -> String {
    disease.replace('_', " ")
}

/// Confidence as a whole percentage, rounding halves up. Absent is 0.
pub fn confidence_percent(confidence: Option<f64>) -> u32 {
    let percent = (confidence.unwrap_or(0.0) * 100.0).round();
    if percent.is_finite() && percent > 0.0 {
        percent as u32
    } else {
        0
    }
}

pub fn confidence_label(confidence: Option<f64>) -> String {
    format!("{}%", confidence_percent(confidence))
}

/// A result entry projected for the results list.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub name: String,
    pub matched: u32,
    pub total: u32,
    pub confidence: String,
}

impl From<&DiagnosisResult> for ResultRow {
    fn from(result: &DiagnosisResult) -> Self {
        Self {
            name: display_name(&result.disease),
            matched: result.matched,
            total: result.total,
            confidence: confidence_label(result.confidence),
        }
    }
}
