pub mod app;
pub mod diagnose;
pub mod metrics;

pub use app::{health_check, index};
pub use diagnose::diagnose_handler;
