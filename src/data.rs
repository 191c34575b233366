// src/data.rs
//! Hardcoded sample data behind the dashboard and analytics screens. These
//! screens are demonstration-only and not wired to the backend.

use eframe::egui::Color32;

pub struct SampleIncident {
    pub timestamp: &'static str,
    pub event_label: &'static str,
    pub status: &'static str,
}

pub struct SampleReasoning {
    pub event_name: &'static str,
    pub event_type: &'static str,
    pub confidence: f64,
    pub reasons: [&'static str; 3],
    pub decision: &'static str,
}

// Parallel arrays: SAMPLE_REASONING[i] explains SAMPLE_INCIDENTS[i].
pub const SAMPLE_INCIDENTS: [SampleIncident; 6] = [
    SampleIncident {
        timestamp: "14:32:05",
        event_label: "Fall Detected",
        status: "ALERT",
    },
    SampleIncident {
        timestamp: "14:28:12",
        event_label: "Choking Risk",
        status: "MONITOR",
    },
    SampleIncident {
        timestamp: "14:15:33",
        event_label: "Suspicious Activity",
        status: "MONITOR",
    },
    SampleIncident {
        timestamp: "14:02:41",
        event_label: "Fall Detected",
        status: "ALERT",
    },
    SampleIncident {
        timestamp: "13:58:22",
        event_label: "Shoplifting Alert",
        status: "ALERT",
    },
    SampleIncident {
        timestamp: "13:45:10",
        event_label: "Loitering",
        status: "NORMAL",
    },
];

pub const SAMPLE_REASONING: [SampleReasoning; 6] = [
    SampleReasoning {
        event_name: "Fall Detected",
        event_type: "fall",
        confidence: 0.94,
        reasons: [
            "Sudden vertical displacement detected in pose keypoints",
            "Prolonged immobility (>3s) after impact",
            "Subject position indicates person on floor",
        ],
        decision: "ALERT",
    },
    SampleReasoning {
        event_name: "Choking Risk",
        event_type: "choking",
        confidence: 0.87,
        reasons: [
            "Hand-to-throat gesture detected",
            "Distressed facial expression classification",
            "Duration exceeds safety threshold",
        ],
        decision: "MONITOR",
    },
    SampleReasoning {
        event_name: "Suspicious Activity",
        event_type: "suspicious",
        confidence: 0.72,
        reasons: [
            "Unusual loitering pattern near restricted area",
            "Multiple direction changes without purpose",
            "No immediate threat indicators",
        ],
        decision: "MONITOR",
    },
    SampleReasoning {
        event_name: "Fall Detected",
        event_type: "fall",
        confidence: 0.91,
        reasons: [
            "Rapid descent from standing position",
            "Impact signature in motion analysis",
            "Subject not responsive for 3+ seconds",
        ],
        decision: "ALERT",
    },
    SampleReasoning {
        event_name: "Shoplifting Alert",
        event_type: "shoplifting",
        confidence: 0.89,
        reasons: [
            "Item concealed in bag without scan",
            "Behavior consistent with theft pattern",
            "Rapid exit toward door",
        ],
        decision: "ALERT",
    },
    SampleReasoning {
        event_name: "Loitering",
        event_type: "suspicious",
        confidence: 0.65,
        reasons: [
            "Extended stay in single zone",
            "No purchase intent signals",
            "Classified as low priority",
        ],
        decision: "MONITOR",
    },
];

pub struct EventBucket {
    pub label: &'static str,
    pub count: u32,
    pub color: Color32,
}

pub const TOTAL_INCIDENTS: u32 = 127;
pub const ALERTS_TODAY: u32 = 8;

pub const EVENT_DISTRIBUTION: [EventBucket; 4] = [
    EventBucket {
        label: "Fall",
        count: 42,
        color: Color32::from_rgb(239, 68, 68),
    },
    EventBucket {
        label: "Suspicious",
        count: 38,
        color: Color32::from_rgb(245, 158, 11),
    },
    EventBucket {
        label: "Shoplifting",
        count: 28,
        color: Color32::from_rgb(244, 63, 94),
    },
    EventBucket {
        label: "Choking",
        count: 19,
        color: Color32::from_rgb(249, 115, 22),
    },
];
