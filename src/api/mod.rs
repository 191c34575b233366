// src/api/mod.rs
use std::path::{Path, PathBuf};

use reqwest::blocking::multipart;
use serde_json::Value;
use thiserror::Error;

use crate::report::{AnalysisReport, AnalyzeResponse, ReportsResponse};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered, but with a failure status; `detail` is the
    /// server-provided message when one exists.
    #[error("{detail}")]
    Backend { status: u16, detail: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("could not read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a background request, delivered to the UI thread over a channel.
#[derive(Debug)]
pub enum ApiEvent {
    HistoryLoaded(Result<Vec<AnalysisReport>, ApiError>),
    AnalysisFinished {
        file_name: String,
        outcome: Result<AnalysisReport, ApiError>,
    },
}

/// Blocking client for the analysis backend. Callers run it on a worker
/// thread and report back through an `ApiEvent` channel.
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn list_reports(&self) -> Result<Vec<AnalysisReport>, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/v1/reports", self.base_url))
            .send()?;
        let status = response.status();
        let body: Value = response.json()?;
        if !status.is_success() {
            return Err(backend_error(status.as_u16(), &body, "Failed to load reports"));
        }
        let parsed: ReportsResponse = serde_json::from_value(body)?;
        Ok(parsed.reports)
    }

    pub fn analyze_upload(
        &self,
        path: &Path,
        file_name: &str,
        mime: &str,
    ) -> Result<AnalysisReport, ApiError> {
        let bytes = std::fs::read(path).map_err(|source| ApiError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/api/v1/analyze/upload", self.base_url))
            .multipart(form)
            .send()?;
        // Parse the body before looking at the status: failure bodies carry a
        // `detail`/`error` string worth surfacing in the toast.
        let status = response.status();
        let body: Value = response.json()?;
        if !status.is_success() {
            return Err(backend_error(status.as_u16(), &body, "Upload failed"));
        }
        let parsed: AnalyzeResponse = serde_json::from_value(body)?;
        Ok(parsed.report)
    }
}

fn backend_error(status: u16, body: &Value, fallback: &str) -> ApiError {
    let detail = body
        .get("detail")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
        .unwrap_or(fallback)
        .to_string();
    ApiError::Backend { status, detail }
}
