use crate::error::ProfileError;
use crate::types::profile::Category;
use crate::types::scoring::CategoryWeights;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScorerConfig {
    pub weights: Option<HashMap<String, f64>>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    pub min_percent: Option<u8>,
}

impl ScorerConfig {
    pub fn weights(&self) -> CategoryWeights {
        let defaults = CategoryWeights::default();
        let Some(weights) = &self.weights else {
            return defaults;
        };
        let pick = |category: Category| {
            weights
                .get(category.config_key())
                .copied()
                .unwrap_or_else(|| defaults.get(category))
        };
        CategoryWeights {
            basic_info: pick(Category::BasicInfo),
            contact: pick(Category::Contact),
            address: pick(Category::Address),
            professional: pick(Category::Professional),
            education: pick(Category::Education),
            work: pick(Category::Work),
            bio: pick(Category::Bio),
        }
    }

    pub fn min_percent(&self) -> u8 {
        self.report
            .as_ref()
            .and_then(|report| report.min_percent)
            .unwrap_or(0)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if let Some(weights) = &self.weights {
            let unknown = weights
                .keys()
                .filter(|key| {
                    !Category::ALL
                        .iter()
                        .any(|category| category.config_key() == key.as_str())
                })
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                return Err(ProfileError::ConfigParse(format!(
                    "weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        let weights = self.weights();
        if Category::ALL
            .iter()
            .any(|category| !(0.0..=100.0).contains(&weights.get(*category)))
        {
            return Err(ProfileError::ConfigParse(
                "weights values must be between 0 and 100".to_string(),
            ));
        }
        let weight_sum = weights.total();
        if (weight_sum - 100.0).abs() > 0.001 {
            return Err(ProfileError::ConfigParse(format!(
                "weights must sum to 100 (found {:.3})",
                weight_sum
            )));
        }

        if self.min_percent() > 100 {
            return Err(ProfileError::ConfigParse(
                "report.min_percent must be between 0 and 100".to_string(),
            ));
        }

        Ok(())
    }
}
