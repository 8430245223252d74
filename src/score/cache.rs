use crate::types::profile::{ProfileSnapshot, ScoredProfile};
use crate::types::scoring::CategoryWeights;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::debug;

/// Memoizes evaluated profiles keyed by a digest of the serialized inputs.
///
/// The cache is owned by its caller. A hit returns the stored result,
/// breakdown and missing fields without evaluating the snapshot again.
#[derive(Debug, Default)]
pub struct ScoreCache {
    entries: HashMap<String, ScoredProfile>,
    hits: u64,
    misses: u64,
}

#[derive(Serialize)]
struct CacheKey<'a> {
    profile: Option<&'a ProfileSnapshot>,
    weights: &'a CategoryWeights,
}

impl ScoreCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluate(
        &mut self,
        profile: Option<&ProfileSnapshot>,
        weights: &CategoryWeights,
    ) -> ScoredProfile {
        let Some(key) = cache_key(profile, weights) else {
            self.misses += 1;
            return super::evaluate(profile, weights);
        };

        if let Some(scored) = self.entries.get(&key) {
            self.hits += 1;
            debug!(key = %&key[..12], "score cache hit");
            return scored.clone();
        }

        self.misses += 1;
        let scored = super::evaluate(profile, weights);
        self.entries.insert(key, scored.clone());
        scored
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn cache_key(profile: Option<&ProfileSnapshot>, weights: &CategoryWeights) -> Option<String> {
    let bytes = serde_json::to_vec(&CacheKey { profile, weights }).ok()?;
    Some(sha256_hex(&bytes))
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::evaluate;

    fn sample() -> ProfileSnapshot {
        ProfileSnapshot {
            first_name: Some("Jane".to_string()),
            phone: Some("555-1234".to_string()),
            ..ProfileSnapshot::default()
        }
    }

    #[test]
    fn repeated_snapshot_is_served_from_cache() {
        let mut cache = ScoreCache::new();
        let weights = CategoryWeights::default();
        let profile = sample();

        let first = cache.evaluate(Some(&profile), &weights);
        let second = cache.evaluate(Some(&profile.clone()), &weights);

        assert_eq!(first, second);
        assert_eq!(second.missing, evaluate(Some(&profile), &weights).missing);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn changed_snapshot_or_weights_miss_the_cache() {
        let mut cache = ScoreCache::new();
        let weights = CategoryWeights::default();
        let mut profile = sample();

        cache.evaluate(Some(&profile), &weights);
        profile.bio = Some("Shift supervisor".to_string());
        let updated = cache.evaluate(Some(&profile), &weights);
        let reweighted = CategoryWeights {
            bio: 10.0,
            work: 5.0,
            ..weights
        };
        let heavier = cache.evaluate(Some(&profile), &reweighted);

        assert_eq!(cache.misses(), 3);
        assert_eq!(cache.hits(), 0);
        assert_eq!(updated, evaluate(Some(&profile), &weights));
        assert_eq!(heavier, evaluate(Some(&profile), &reweighted));
    }

    #[test]
    fn missing_snapshot_is_cached_like_any_other_input() {
        let mut cache = ScoreCache::new();
        let weights = CategoryWeights::default();

        assert_eq!(cache.evaluate(None, &weights).result.percent, 0);
        assert_eq!(cache.evaluate(None, &weights).missing.len(), 14);
        assert_eq!(cache.hits(), 1);
        assert!(!cache.is_empty());
    }
}
