// src/state/upload.rs
use std::path::PathBuf;
use std::time::Instant;

use chrono::DateTime;

use crate::api::ApiError;
use crate::report::{self, AnalysisReport, DisplayResult};

#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub mime: String,
}

impl SelectedFile {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        // Native drops and file dialogs yield paths, not browser MIME strings;
        // the declared type is guessed from the extension.
        let mime = mime_guess::from_path(&path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self { path, name, mime }
    }

    pub fn is_video(&self) -> bool {
        self.mime.starts_with("video/")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// A remembered past analysis, shown in the sidebar. Once a result is
/// attached it is never replaced.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub id: String,
    pub video_name: String,
    pub created_at: String,
    pub result: Option<DisplayResult>,
}

impl HistoryEntry {
    fn from_report(report: &AnalysisReport) -> Self {
        Self {
            id: report.report_id.clone(),
            video_name: report.source_filename.clone(),
            created_at: report.created_at.clone(),
            result: Some(report::display_result(report)),
        }
    }

    /// Sidebar label; falls back to the raw string when the backend
    /// timestamp is not RFC 3339.
    pub fn created_at_label(&self) -> String {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }
}

/// State of one select-analyze-display cycle plus the running history.
/// Transitions are plain methods so the flow is testable without a GUI or a
/// network; thread spawning lives in the app layer.
#[derive(Debug, Default)]
pub struct UploadState {
    pub selected: Option<SelectedFile>,
    pub drag_active: bool,
    pub processing: bool,
    pub loading_history: bool,
    pub toast: Option<Toast>,
    pub current_result: Option<DisplayResult>,
    pub history: Vec<HistoryEntry>,
    /// When the result card's copy button was last pressed; drives the
    /// transient "Copied" label.
    pub copied_at: Option<Instant>,
}

impl UploadState {
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.selected = file;
    }

    /// First dropped file only; non-video drops are silently ignored.
    pub fn accept_drop(&mut self, path: PathBuf) {
        self.drag_active = false;
        let file = SelectedFile::from_path(path);
        if file.is_video() {
            self.selected = Some(file);
        }
    }

    /// Validate and claim the in-flight slot. Returns the file to upload, or
    /// `None` when validation failed (toast set) or a request is already
    /// running.
    pub fn begin_submit(&mut self) -> Option<SelectedFile> {
        if self.processing {
            return None;
        }
        match &self.selected {
            Some(file) if file.is_video() => {
                self.processing = true;
                self.toast = None;
                self.current_result = None;
                Some(file.clone())
            }
            _ => {
                self.toast = Some(Toast::error("Please select a video file first"));
                None
            }
        }
    }

    /// Settle a submission. `processing` clears on every outcome.
    pub fn finish_submit(&mut self, outcome: Result<AnalysisReport, ApiError>) {
        self.processing = false;
        match outcome {
            Ok(ref report) => {
                let entry = HistoryEntry::from_report(report);
                self.selected = None;
                self.current_result = entry.result.clone();
                self.history.insert(0, entry);
                self.toast = Some(Toast::success("Video analyzed successfully"));
            }
            Err(err) => {
                // The selected file is kept so the user can retry without
                // re-choosing it.
                self.toast = Some(Toast::error(err.to_string()));
            }
        }
    }

    pub fn finish_history_load(&mut self, outcome: Result<Vec<AnalysisReport>, ApiError>) {
        self.loading_history = false;
        match outcome {
            Ok(mut reports) => {
                // Newest first in the sidebar.
                reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                self.history = reports.iter().map(HistoryEntry::from_report).collect();
            }
            Err(_) => {
                self.toast = Some(Toast::error(
                    "Could not load past reports. Is the analysis backend running?",
                ));
            }
        }
    }

    /// Restore a past result from the sidebar; no-op when the entry carries
    /// none. Never refetches.
    pub fn select_history_entry(&mut self, index: usize) {
        if let Some(result) = self.history.get(index).and_then(|e| e.result.clone()) {
            self.current_result = Some(result);
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Incident;

    fn video_file() -> SelectedFile {
        SelectedFile::from_path(PathBuf::from("/videos/clip.mp4"))
    }

    fn report(id: &str) -> AnalysisReport {
        AnalysisReport {
            report_id: id.to_string(),
            source_filename: "clip.mp4".to_string(),
            created_at: "2024-05-01T12:00:00Z".to_string(),
            processing_time_ms: 87.0,
            met_latency_target: true,
            summary: "All clear.".to_string(),
            incidents: vec![Incident {
                incident_type: "fall".to_string(),
                confidence: 0.9,
                timestamp_seconds: 3.0,
                evidence: "impact".to_string(),
                recommended_action: "Dispatch staff".to_string(),
            }],
            raw_signals: None,
        }
    }

    #[test]
    fn mime_is_guessed_from_extension() {
        assert!(video_file().is_video());
        assert!(!SelectedFile::from_path(PathBuf::from("/notes.txt")).is_video());
    }

    #[test]
    fn submit_without_file_produces_validation_toast_and_no_job() {
        let mut state = UploadState::default();
        assert!(state.begin_submit().is_none());
        assert!(!state.processing);
        let toast = state.toast.expect("toast expected");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Please select a video file first");
    }

    #[test]
    fn submit_with_non_video_file_produces_validation_toast_and_no_job() {
        let mut state = UploadState::default();
        state.select_file(Some(SelectedFile::from_path(PathBuf::from("/notes.txt"))));
        assert!(state.begin_submit().is_none());
        assert!(!state.processing);
        assert_eq!(state.toast.unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn submit_claims_inflight_slot_and_clears_previous_result() {
        let mut state = UploadState::default();
        state.select_file(Some(video_file()));
        state.current_result = Some(crate::report::display_result(&report("old")));
        state.toast = Some(Toast::success("stale"));

        let job = state.begin_submit().expect("job expected");
        assert_eq!(job.name, "clip.mp4");
        assert!(state.processing);
        assert!(state.toast.is_none());
        assert!(state.current_result.is_none());
    }

    #[test]
    fn duplicate_submit_while_processing_is_refused() {
        let mut state = UploadState::default();
        state.select_file(Some(video_file()));
        assert!(state.begin_submit().is_some());
        assert!(state.begin_submit().is_none());
        assert!(state.toast.is_none());
    }

    #[test]
    fn successful_submit_prepends_exactly_one_history_entry() {
        let mut state = UploadState::default();
        state.history = vec![HistoryEntry::from_report(&report("earlier"))];
        state.select_file(Some(video_file()));
        state.begin_submit().unwrap();

        state.finish_submit(Ok(report("fresh")));

        assert!(!state.processing);
        assert!(state.selected.is_none());
        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[0].id, "fresh");
        assert_eq!(
            state.current_result.as_ref().unwrap(),
            state.history[0].result.as_ref().unwrap()
        );
        assert_eq!(state.toast.unwrap().kind, ToastKind::Success);
    }

    #[test]
    fn failed_submit_keeps_selected_file_and_no_result() {
        let mut state = UploadState::default();
        state.select_file(Some(video_file()));
        state.begin_submit().unwrap();

        state.finish_submit(Err(ApiError::Backend {
            status: 503,
            detail: "Frame-by-frame latency target not met".to_string(),
        }));

        assert!(!state.processing);
        assert!(state.current_result.is_none());
        assert_eq!(state.selected.as_ref().unwrap().name, "clip.mp4");
        assert!(state.history.is_empty());
        let toast = state.toast.unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Frame-by-frame latency target not met");
    }

    #[test]
    fn history_load_orders_newest_first() {
        let mut state = UploadState::default();
        state.loading_history = true;

        let mut older = report("older");
        older.created_at = "2024-05-01T08:00:00Z".to_string();
        let mut newer = report("newer");
        newer.created_at = "2024-05-01T19:30:00Z".to_string();

        state.finish_history_load(Ok(vec![older, newer]));

        assert!(!state.loading_history);
        assert_eq!(state.history[0].id, "newer");
        assert_eq!(state.history[1].id, "older");
        assert!(state.history[0].result.is_some());
    }

    #[test]
    fn history_load_failure_leaves_history_empty_with_toast() {
        let mut state = UploadState::default();
        state.loading_history = true;

        state.finish_history_load(Err(ApiError::Backend {
            status: 500,
            detail: "down".to_string(),
        }));

        assert!(!state.loading_history);
        assert!(state.history.is_empty());
        assert_eq!(state.toast.unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn selecting_history_entry_restores_its_result() {
        let mut state = UploadState::default();
        state.history = vec![HistoryEntry::from_report(&report("past"))];

        state.select_history_entry(0);

        assert_eq!(
            state.current_result.as_ref(),
            state.history[0].result.as_ref()
        );
    }

    #[test]
    fn selecting_entry_without_result_is_a_no_op() {
        let mut state = UploadState::default();
        state.history = vec![HistoryEntry {
            id: "bare".to_string(),
            video_name: "old.mp4".to_string(),
            created_at: "2024-05-01T12:00:00Z".to_string(),
            result: None,
        }];

        state.select_history_entry(0);
        state.select_history_entry(99);

        assert!(state.current_result.is_none());
    }

    #[test]
    fn drop_accepts_first_video_and_ignores_the_rest() {
        let mut state = UploadState::default();
        state.drag_active = true;

        state.accept_drop(PathBuf::from("/drop/readme.md"));
        assert!(!state.drag_active);
        assert!(state.selected.is_none());

        state.accept_drop(PathBuf::from("/drop/cam.mov"));
        assert_eq!(state.selected.as_ref().unwrap().name, "cam.mov");
    }

    #[test]
    fn created_at_label_falls_back_to_raw_string() {
        let entry = HistoryEntry {
            id: "x".to_string(),
            video_name: "v.mp4".to_string(),
            created_at: "yesterday".to_string(),
            result: None,
        };
        assert_eq!(entry.created_at_label(), "yesterday");

        let entry = HistoryEntry {
            created_at: "2024-05-01T12:34:00Z".to_string(),
            ..entry
        };
        assert_eq!(entry.created_at_label(), "2024-05-01 12:34");
    }
}
