//! Profile completion scoring.
//!
//! Every entry point is total: a missing snapshot, blank strings and empty
//! lists all score as absent. Boundary parsing of untrusted JSON lives in
//! [`crate::input`].

pub mod cache;
pub mod fields;

use crate::types::profile::{
    Category, CategoryScore, CompletionDetails, CompletionResult, ProfileSnapshot, ScoredProfile,
};
use crate::types::scoring::{CategoryWeights, Points};
use fields::{
    absent_names, count_present, is_present, list_len, Field, ADDRESS_FIELDS, BASIC_FIELDS,
    PROFESSIONAL_FIELDS,
};
use tracing::trace;

/// Address fields needed for the address badge. Scoring still requires all five
/// for full credit; the looser badge threshold is existing behaviour.
pub const ADDRESS_BADGE_MIN_FIELDS: usize = 3;

pub fn score(profile: Option<&ProfileSnapshot>) -> CompletionResult {
    score_with_weights(profile, &CategoryWeights::default())
}

pub fn score_with_weights(
    profile: Option<&ProfileSnapshot>,
    weights: &CategoryWeights,
) -> CompletionResult {
    result_from(&breakdown(profile, weights))
}

/// Scores a snapshot and keeps the per-category breakdown and missing fields.
pub fn evaluate(profile: Option<&ProfileSnapshot>, weights: &CategoryWeights) -> ScoredProfile {
    let categories = breakdown(profile, weights);
    ScoredProfile {
        result: result_from(&categories),
        missing: missing_fields(profile),
        categories,
    }
}

pub fn breakdown(
    profile: Option<&ProfileSnapshot>,
    weights: &CategoryWeights,
) -> Vec<CategoryScore> {
    let empty = ProfileSnapshot::default();
    let profile = profile.unwrap_or(&empty);

    Category::ALL
        .iter()
        .map(|category| {
            let (present, total) = coverage(profile, *category);
            let weight = weights.get(*category);
            CategoryScore {
                category: *category,
                present,
                total,
                points: weight * present as Points / total as Points,
                weight,
                complete: present >= badge_threshold(*category, total),
            }
        })
        .collect()
}

/// Absent field names grouped by category, skipping complete categories.
pub fn missing_by_category(
    profile: Option<&ProfileSnapshot>,
) -> Vec<(Category, Vec<&'static str>)> {
    let empty = ProfileSnapshot::default();
    let profile = profile.unwrap_or(&empty);

    Category::ALL
        .iter()
        .map(|category| {
            let missing = match category {
                Category::BasicInfo => absent_names(profile, &BASIC_FIELDS),
                Category::Contact => absent_names(profile, &[Field::Phone]),
                Category::Address => absent_names(profile, &ADDRESS_FIELDS),
                Category::Professional => absent_names(profile, &PROFESSIONAL_FIELDS),
                Category::Education => absent_list("education", profile.education.as_ref()),
                Category::Work => absent_list("work_history", profile.work_history.as_ref()),
                Category::Bio => absent_names(profile, &[Field::Bio]),
            };
            (*category, missing)
        })
        .filter(|(_, missing)| !missing.is_empty())
        .collect()
}

pub fn missing_fields(profile: Option<&ProfileSnapshot>) -> Vec<&'static str> {
    missing_by_category(profile)
        .into_iter()
        .flat_map(|(_, missing)| missing)
        .collect()
}

fn coverage(profile: &ProfileSnapshot, category: Category) -> (usize, usize) {
    match category {
        Category::BasicInfo => (count_present(profile, &BASIC_FIELDS), BASIC_FIELDS.len()),
        Category::Contact => (usize::from(is_present(profile.phone.as_deref())), 1),
        Category::Address => (count_present(profile, &ADDRESS_FIELDS), ADDRESS_FIELDS.len()),
        Category::Professional => (
            count_present(profile, &PROFESSIONAL_FIELDS),
            PROFESSIONAL_FIELDS.len(),
        ),
        Category::Education => (usize::from(list_len(profile.education.as_ref()) > 0), 1),
        Category::Work => (usize::from(list_len(profile.work_history.as_ref()) > 0), 1),
        Category::Bio => (usize::from(is_present(profile.bio.as_deref())), 1),
    }
}

fn badge_threshold(category: Category, total: usize) -> usize {
    match category {
        Category::Address => ADDRESS_BADGE_MIN_FIELDS,
        _ => total,
    }
}

fn absent_list(name: &'static str, list: Option<&Vec<serde_json::Value>>) -> Vec<&'static str> {
    if list_len(list) > 0 {
        Vec::new()
    } else {
        vec![name]
    }
}

fn result_from(categories: &[CategoryScore]) -> CompletionResult {
    let raw: Points = categories.iter().map(|category| category.points).sum();
    let percent = raw.round().clamp(0.0, 100.0) as u8;
    trace!(raw, percent, "profile completion scored");

    CompletionResult {
        percent,
        details: details_from(categories),
    }
}

fn details_from(categories: &[CategoryScore]) -> CompletionDetails {
    let complete = |wanted: Category| {
        categories
            .iter()
            .any(|category| category.category == wanted && category.complete)
    };
    CompletionDetails {
        basic_info: complete(Category::BasicInfo),
        contact: complete(Category::Contact),
        address: complete(Category::Address),
        professional: complete(Category::Professional),
        education: complete(Category::Education),
        work: complete(Category::Work),
        bio: complete(Category::Bio),
    }
}
