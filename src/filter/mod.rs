pub mod orchestrator;
pub mod predicate;

pub use orchestrator::{apply_filters, FilterOutcome};
pub use predicate::Predicate;
