use crate::types::profile::{CategoryScore, CompletionResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub source: String,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: CompletionResult,
    pub categories: Vec<CategoryScore>,
    pub missing: Vec<&'static str>,
}

impl ProfileReport {
    pub fn below(&self, min_percent: u8) -> bool {
        self.result.percent < min_percent
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub scored: usize,
    pub failed: usize,
    pub below_threshold: usize,
    pub average_percent: f64,
}
