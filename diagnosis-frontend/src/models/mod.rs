pub mod diagnosis;

pub use diagnosis::{DiagnoseRequest, DiagnosisReply, DiagnosisResult};
