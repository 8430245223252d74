pub mod json;
pub mod md;

use crate::error::ProfileError;
use crate::types::profile::ScoredProfile;
use crate::types::report::{BatchSummary, ProfileReport};
use chrono::Utc;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn build(source: &str, scored: ScoredProfile) -> ProfileReport {
    ProfileReport {
        source: source.to_string(),
        generated_at: Utc::now(),
        result: scored.result,
        categories: scored.categories,
        missing: scored.missing,
    }
}

pub fn render(report: &ProfileReport, format: OutputFormat) -> Result<String, ProfileError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ProfileError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_batch(
    reports: &[ProfileReport],
    summary: &BatchSummary,
    format: OutputFormat,
) -> Result<String, ProfileError> {
    match format {
        OutputFormat::Json => json::batch_to_json(reports, summary).map_err(ProfileError::Json),
        OutputFormat::Md => Ok(md::batch_to_markdown(reports, summary)),
    }
}
