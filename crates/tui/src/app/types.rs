use datainsight_analysis::AnalysisError;

/// Raw report plus receipt time. Display segments are recomputed from
/// `report` on every render, never cached here.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub report: String,
    pub received_at: chrono::DateTime<chrono::Utc>,
}

pub enum AppAsyncEvent {
    AnalysisFinished {
        generation: u64,
        report: Option<String>,
        error: Option<AnalysisError>,
    },
}
