// Modules
pub mod binarize;
pub mod constants;
pub mod data;
pub mod data_bias;
pub mod drift;
pub mod errors;
pub mod metrics;
pub mod model_bias;
pub mod partition;
pub mod report;
pub mod utils;

// Individual classes, and functions
pub use drift::{runtime_comparison, DriftReport};
pub use errors::FairlensError;
pub use metrics::rate::Rate;
pub use report::{AnalysisKind, BiasReport};
