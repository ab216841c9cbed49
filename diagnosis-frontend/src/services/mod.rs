pub mod diagnosis_client;
pub mod metrics;

pub use diagnosis_client::{DiagnosisApi, DiagnosisClient, DiagnosisClientError, DIAGNOSE_PATH};
pub use self::metrics::{get_metrics, init_metrics};
