pub mod format;
pub mod state;
pub mod tokenize;

pub use format::{confidence_label, confidence_percent, display_name, ResultRow};
pub use state::{
    DiagnosisView, ViewState, EMPTY_INPUT_MESSAGE, NO_RESULTS_MESSAGE, REQUEST_FAILED_MESSAGE,
    SUBMIT_BUSY_LABEL, SUBMIT_LABEL,
};
pub use tokenize::tokenize_symptoms;
