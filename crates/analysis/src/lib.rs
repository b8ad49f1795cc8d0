pub mod client;
pub mod error;
pub mod report;
pub mod types;

pub use client::{AnalysisClient, FALLBACK_REPORT};
pub use error::AnalysisError;
pub use report::{SectionIcon, Segment};
pub use types::SelectedFile;
