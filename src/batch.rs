use crate::error::{ProfileError, Result};
use crate::input;
use crate::report;
use crate::score::cache::ScoreCache;
use crate::types::report::{BatchSummary, ProfileReport};
use crate::types::scoring::CategoryWeights;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct BatchOutcome {
    pub reports: Vec<ProfileReport>,
    pub failures: Vec<(PathBuf, ProfileError)>,
    pub summary: BatchSummary,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

#[derive(Debug, Default)]
pub struct SnapshotListing {
    pub files: Vec<PathBuf>,
    pub unreadable: Vec<(PathBuf, ProfileError)>,
}

/// Collects `*.json` files under `root` in path order. Entries the walk cannot
/// read are returned alongside instead of being dropped.
pub fn list_snapshot_files(root: &Path) -> SnapshotListing {
    let mut listing = SnapshotListing::default();
    for entry in WalkDir::new(root).follow_links(true) {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if entry.file_type().is_file()
                    && path.extension().is_some_and(|ext| ext == "json")
                {
                    listing.files.push(path.to_path_buf());
                }
            }
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                warn!(path = %path.display(), error = %err, "cannot walk snapshot entry");
                listing
                    .unreadable
                    .push((path, ProfileError::Io(std::io::Error::from(err))));
            }
        }
    }
    listing.files.sort();
    listing
}

pub fn score_directory(
    root: &Path,
    weights: &CategoryWeights,
    min_percent: u8,
) -> Result<BatchOutcome> {
    if !root.is_dir() {
        return Err(ProfileError::PathNotFound(root.display().to_string()));
    }

    let SnapshotListing {
        files,
        unreadable: mut failures,
    } = list_snapshot_files(root);
    info!(root = %root.display(), files = files.len(), "scoring snapshot directory");

    let mut cache = ScoreCache::new();
    let mut reports = Vec::new();
    for path in files {
        let parsed = std::fs::read_to_string(&path)
            .map_err(ProfileError::Io)
            .and_then(|text| input::parse_snapshot(&text));
        match parsed {
            Ok(profile) => {
                let source = path
                    .strip_prefix(root)
                    .unwrap_or(path.as_path())
                    .display()
                    .to_string();
                let scored = cache.evaluate(profile.as_ref(), weights);
                reports.push(report::build(&source, scored));
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable snapshot");
                failures.push((path, err));
            }
        }
    }

    let summary = summarize(&reports, failures.len(), min_percent);
    info!(
        scored = summary.scored,
        failed = summary.failed,
        cache_hits = cache.hits(),
        "batch complete"
    );
    Ok(BatchOutcome {
        reports,
        failures,
        summary,
        cache_hits: cache.hits(),
        cache_misses: cache.misses(),
    })
}

fn summarize(reports: &[ProfileReport], failed: usize, min_percent: u8) -> BatchSummary {
    let total: u64 = reports
        .iter()
        .map(|report| u64::from(report.result.percent))
        .sum();
    BatchSummary {
        scored: reports.len(),
        failed,
        below_threshold: reports
            .iter()
            .filter(|report| report.below(min_percent))
            .count(),
        average_percent: if reports.is_empty() {
            0.0
        } else {
            total as f64 / reports.len() as f64
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, body: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("parent dir should create");
        }
        fs::write(path, body).expect("snapshot should write");
    }

    #[test]
    fn scores_json_files_recursively_in_path_order() {
        let dir = TempDir::new().expect("temp dir should be created");
        write(dir.path(), "b.json", r#"{"phone": "555"}"#);
        write(dir.path(), "a.json", r#"{"bio": "hi"}"#);
        write(dir.path(), "nested/c.json", "null");
        write(dir.path(), "notes.txt", "not a snapshot");

        let outcome = score_directory(dir.path(), &CategoryWeights::default(), 10)
            .expect("batch should run");

        let sources = outcome
            .reports
            .iter()
            .map(|report| report.source.clone())
            .collect::<Vec<_>>();
        assert_eq!(
            sources,
            vec![
                "a.json".to_string(),
                "b.json".to_string(),
                Path::new("nested").join("c.json").display().to_string()
            ]
        );
        assert_eq!(outcome.summary.scored, 3);
        assert_eq!(outcome.summary.below_threshold, 2);
        assert!((outcome.summary.average_percent - 20.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn unparsable_files_are_counted_as_failures() {
        let dir = TempDir::new().expect("temp dir should be created");
        write(dir.path(), "good.json", r#"{"phone": "555"}"#);
        write(dir.path(), "bad.json", "{ nope");
        write(dir.path(), "list.json", "[]");

        let outcome = score_directory(dir.path(), &CategoryWeights::default(), 0)
            .expect("batch should run");

        assert_eq!(outcome.summary.scored, 1);
        assert_eq!(outcome.summary.failed, 2);
        assert_eq!(outcome.failures.len(), 2);
    }

    #[test]
    fn duplicate_snapshots_are_evaluated_once() {
        let dir = TempDir::new().expect("temp dir should be created");
        let body = r#"{"first_name": "Jane", "bio": "Line lead"}"#;
        write(dir.path(), "a.json", body);
        write(dir.path(), "b.json", body);
        write(dir.path(), "c.json", r#"{"phone": "555"}"#);

        let outcome = score_directory(dir.path(), &CategoryWeights::default(), 0)
            .expect("batch should run");

        assert_eq!(outcome.cache_hits, 1);
        assert_eq!(outcome.cache_misses, 2);
        assert_eq!(outcome.reports[0].categories, outcome.reports[1].categories);
        assert_eq!(outcome.reports[0].missing, outcome.reports[1].missing);
        assert_eq!(outcome.reports[1].source, "b.json");
    }

    #[cfg(unix)]
    #[test]
    fn unwalkable_entries_are_counted_as_failures() {
        let dir = TempDir::new().expect("temp dir should be created");
        write(dir.path(), "good.json", r#"{"phone": "555"}"#);
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling.json"))
            .expect("symlink should create");

        let outcome = score_directory(dir.path(), &CategoryWeights::default(), 0)
            .expect("batch should run");

        assert_eq!(outcome.summary.scored, 1);
        assert_eq!(outcome.summary.failed, 1);
        assert!(outcome.failures[0].0.ends_with("dangling.json"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = score_directory(&dir.path().join("absent"), &CategoryWeights::default(), 0)
            .expect_err("missing dir should fail");
        assert!(matches!(err, ProfileError::PathNotFound(_)));
    }
}
