// src/state/mod.rs
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::api::{ApiClient, ApiEvent};
use crate::settings::AppConfig;

pub mod upload;

// Re-export commonly used types
pub use upload::{Toast, ToastKind, UploadState};

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Upload,
    Dashboard,
    Analytics,
    Realtime,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Theme {
    Dark,
    Light,
}

// Core application state
pub struct AppState {
    pub upload: UploadState,

    // Minimal shell state
    pub current_screen: Screen,
    pub theme: Theme,
    pub selected_incident: usize,

    // Backend plumbing: requests run on worker threads and settle through
    // the event channel, drained once per frame.
    client: Arc<ApiClient>,
    events_tx: Sender<ApiEvent>,
    events_rx: Receiver<ApiEvent>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        let mut state = Self {
            upload: UploadState::default(),
            current_screen: Screen::Upload,
            theme: Theme::Dark,
            selected_incident: 0,
            client: Arc::new(ApiClient::new(&config.api_base_url)),
            events_tx,
            events_rx,
        };
        // Past reports populate the sidebar once, on startup.
        state.load_history();
        state
    }

    /// Fetch the report list in the background; failures leave the history
    /// empty and surface a toast. Never retried automatically.
    pub fn load_history(&mut self) {
        self.upload.loading_history = true;
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        thread::spawn(move || {
            let outcome = client.list_reports();
            let _ = tx.send(ApiEvent::HistoryLoaded(outcome));
        });
    }

    /// Validate and kick off an upload. The worker always sends a completion
    /// event, so `processing` clears on every settle.
    pub fn submit(&mut self) {
        let Some(file) = self.upload.begin_submit() else {
            return;
        };
        log::info!("analyzing {}", file.name);
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        thread::spawn(move || {
            let outcome = client.analyze_upload(&file.path, &file.name, &file.mime);
            let _ = tx.send(ApiEvent::AnalysisFinished {
                file_name: file.name,
                outcome,
            });
        });
    }

    /// Drain settled background work into the UI state. Called every frame.
    pub fn pump_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                ApiEvent::HistoryLoaded(outcome) => {
                    if let Err(err) = &outcome {
                        log::warn!("history load failed: {err}");
                    }
                    self.upload.finish_history_load(outcome);
                }
                ApiEvent::AnalysisFinished { file_name, outcome } => {
                    match &outcome {
                        Ok(report) => {
                            log::info!("analysis of {file_name} finished: report {}", report.report_id)
                        }
                        Err(err) => log::warn!("analysis of {file_name} failed: {err}"),
                    }
                    self.upload.finish_submit(outcome);
                }
            }
        }
    }

    pub fn busy(&self) -> bool {
        self.upload.processing || self.upload.loading_history
    }
}
