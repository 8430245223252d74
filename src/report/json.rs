use crate::types::report::{BatchSummary, ProfileReport};
use serde_json::json;

pub fn to_json(report: &ProfileReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn batch_to_json(
    reports: &[ProfileReport],
    summary: &BatchSummary,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "reports": reports,
        "summary": summary,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::profile::{CompletionDetails, CompletionResult};
    use chrono::Utc;

    fn sample_report() -> ProfileReport {
        ProfileReport {
            source: "jane.json".to_string(),
            generated_at: Utc::now(),
            result: CompletionResult {
                percent: 35,
                details: CompletionDetails {
                    basic_info: true,
                    contact: true,
                    ..CompletionDetails::default()
                },
            },
            categories: vec![],
            missing: vec!["bio"],
        }
    }

    #[test]
    fn json_report_flattens_percent_and_details() {
        let rendered = to_json(&sample_report()).expect("json should serialize");
        assert!(rendered.contains("\"percent\": 35"));
        assert!(rendered.contains("\"basicInfo\": true"));
        assert!(rendered.contains("\"missing\""));
    }

    #[test]
    fn batch_json_includes_summary() {
        let summary = BatchSummary {
            scored: 1,
            failed: 0,
            below_threshold: 0,
            average_percent: 35.0,
        };
        let rendered =
            batch_to_json(&[sample_report()], &summary).expect("json should serialize");
        assert!(rendered.contains("\"reports\""));
        assert!(rendered.contains("\"scored\": 1"));
    }
}
