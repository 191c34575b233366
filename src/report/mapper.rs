// src/report/mapper.rs
use super::{AnalysisReport, DisplayResult, NO_INCIDENT_TYPE};

const MAX_INCIDENT_LINES: usize = 4;

/// Project a backend report into the shape the result card renders.
/// Pure and deterministic; tolerates missing optional fields.
pub fn display_result(report: &AnalysisReport) -> DisplayResult {
    let mut insights = Vec::new();

    let latency = report.raw_signals.as_ref().and_then(|s| s.latency.as_ref());
    match latency {
        Some(lat) => insights.push(format!(
            "p95 {:.1}ms, max {:.1}ms, violations {}",
            lat.p95_ms.unwrap_or(0.0),
            lat.max_ms.unwrap_or(0.0),
            lat.violations.unwrap_or(0),
        )),
        None => insights.push(format!(
            "analysis latency {:.1}ms",
            report.processing_time_ms
        )),
    }

    insights.push(format!(
        "Latency target met: {}",
        if report.met_latency_target { "Yes" } else { "No" }
    ));

    let before = insights.len();
    insights.extend(
        report
            .incidents
            .iter()
            .filter(|incident| incident.incident_type != NO_INCIDENT_TYPE)
            .take(MAX_INCIDENT_LINES)
            .map(|incident| {
                format!(
                    "{} ({:.0}%) at {}s: {}",
                    incident.incident_type,
                    incident.confidence * 100.0,
                    incident.timestamp_seconds,
                    incident.evidence,
                )
            }),
    );
    if insights.len() == before {
        insights.push("No critical incidents detected.".to_string());
    }

    DisplayResult {
        video_name: report.source_filename.clone(),
        summary: report.summary.clone(),
        insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Incident, LatencySignals, RawSignals};

    fn base_report() -> AnalysisReport {
        AnalysisReport {
            report_id: "r-1".to_string(),
            source_filename: "clip.mp4".to_string(),
            created_at: "2024-05-01T12:00:00Z".to_string(),
            processing_time_ms: 450.0,
            met_latency_target: true,
            summary: "Nothing unusual.".to_string(),
            incidents: Vec::new(),
            raw_signals: None,
        }
    }

    fn incident(incident_type: &str, confidence: f64, at: f64, evidence: &str) -> Incident {
        Incident {
            incident_type: incident_type.to_string(),
            confidence,
            timestamp_seconds: at,
            evidence: evidence.to_string(),
            recommended_action: "Review footage".to_string(),
        }
    }

    #[test]
    fn latency_line_without_raw_signals() {
        let result = display_result(&base_report());
        assert_eq!(result.insights[0], "analysis latency 450.0ms");
    }

    #[test]
    fn latency_line_with_raw_signals() {
        let mut report = base_report();
        report.raw_signals = Some(RawSignals {
            latency: Some(LatencySignals {
                p95_ms: Some(120.0),
                max_ms: Some(300.0),
                violations: Some(2),
            }),
        });
        let result = display_result(&report);
        assert_eq!(result.insights[0], "p95 120.0ms, max 300.0ms, violations 2");
    }

    #[test]
    fn missing_latency_fields_default_to_zero() {
        let mut report = base_report();
        report.raw_signals = Some(RawSignals {
            latency: Some(LatencySignals::default()),
        });
        let result = display_result(&report);
        assert_eq!(result.insights[0], "p95 0.0ms, max 0.0ms, violations 0");
    }

    #[test]
    fn latency_target_line_yes_and_no() {
        let mut report = base_report();
        assert_eq!(
            display_result(&report).insights[1],
            "Latency target met: Yes"
        );
        report.met_latency_target = false;
        assert_eq!(
            display_result(&report).insights[1],
            "Latency target met: No"
        );
    }

    #[test]
    fn incident_line_format() {
        let mut report = base_report();
        report.incidents = vec![incident("fall", 0.94, 12.3, "x")];
        let result = display_result(&report);
        assert_eq!(result.insights[2], "fall (94%) at 12.3s: x");
    }

    #[test]
    fn none_incidents_are_filtered_and_fallback_appears() {
        let mut report = base_report();
        report.incidents = vec![incident("none", 0.99, 1.0, "quiet")];
        let result = display_result(&report);
        assert_eq!(result.insights.len(), 3);
        assert_eq!(result.insights[2], "No critical incidents detected.");
    }

    #[test]
    fn incident_lines_capped_at_four() {
        let mut report = base_report();
        report.incidents = (0..6)
            .map(|i| incident("fall", 0.9, i as f64, "impact"))
            .collect();
        let result = display_result(&report);
        // latency line + target line + 4 incident lines, no fallback
        assert_eq!(result.insights.len(), 6);
        assert!(result
            .insights
            .iter()
            .all(|line| line != "No critical incidents detected."));
    }

    #[test]
    fn mapper_is_idempotent() {
        let mut report = base_report();
        report.incidents = vec![
            incident("fall", 0.94, 12.3, "x"),
            incident("none", 0.5, 2.0, "quiet"),
        ];
        assert_eq!(display_result(&report), display_result(&report));
    }
}
