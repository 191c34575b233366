// src/report/mod.rs
use serde::Deserialize;

pub mod mapper;

pub use mapper::display_result;

/// Sentinel incident type the backend emits when nothing of interest was found.
pub const NO_INCIDENT_TYPE: &str = "none";

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisReport {
    pub report_id: String,
    pub source_filename: String,
    /// ISO timestamp string as issued by the backend; parsed leniently for display.
    pub created_at: String,
    #[serde(default)]
    pub processing_time_ms: f64,
    #[serde(default)]
    pub met_latency_target: bool,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub incidents: Vec<Incident>,
    #[serde(default)]
    pub raw_signals: Option<RawSignals>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Incident {
    pub incident_type: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub timestamp_seconds: f64,
    #[serde(default)]
    pub evidence: String,
    #[serde(default)]
    pub recommended_action: String,
}

// The backend dumps a grab-bag of signal sections (video/pose/audio/latency);
// only the latency block is rendered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSignals {
    #[serde(default)]
    pub latency: Option<LatencySignals>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LatencySignals {
    #[serde(default)]
    pub p95_ms: Option<f64>,
    #[serde(default)]
    pub max_ms: Option<f64>,
    #[serde(default)]
    pub violations: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportsResponse {
    #[serde(default)]
    pub reports: Vec<AnalysisReport>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    pub report: AnalysisReport,
}

/// UI projection of a report: what the result card renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayResult {
    pub video_name: String,
    pub summary: String,
    pub insights: Vec<String>,
}
