use serde::{Deserialize, Serialize};

/// Body of `POST /api/diagnose`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DiagnoseRequest {
    pub symptoms: Vec<String>,
}

/// One candidate condition, exactly as returned by the diagnosis service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DiagnosisResult {
    /// Condition name; underscores stand in for spaces (`common_cold`).
    pub disease: String,
    pub matched: u32,
    pub total: u32,
    /// Match strength in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Interpretation of a successful (2xx) response body.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosisReply {
    /// The body had a `results` field; entries keep server order.
    Results(Vec<DiagnosisResult>),
    /// No `results`; `message` is the server's explanation, if any.
    NoResults { message: Option<String> },
}

impl DiagnosisReply {
    /// Interpret a parsed response body.
    ///
    /// The body must be a JSON object. A null `results` counts as absent.
    /// A `results` value that is not a list of well-formed entries is an
    /// error.
    pub fn from_body(body: serde_json::Value) -> Result<Self, serde_json::Error> {
        if !body.is_object() {
            return Err(serde::de::Error::custom(format!(
                "expected a JSON object, got {body}"
            )));
        }

        match body.get("results") {
            Some(results) if !results.is_null() => {
                let results = Vec::<DiagnosisResult>::deserialize(results)?;
                Ok(DiagnosisReply::Results(results))
            }
            _ => Ok(DiagnosisReply::NoResults {
                message: body
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(|m| m.to_string()),
            }),
        }
    }
}
