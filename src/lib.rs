//! Profile completion scoring for the intranet profile editor.
//!
//! [`score::score`] is the entry point the UI layer calls with a snapshot it
//! has already parsed; [`input::parse_snapshot`] turns raw upstream JSON into
//! that snapshot.

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod score;
pub mod types;

pub use error::{ProfileError, Result};
pub use score::{score, score_with_weights};
pub use types::profile::{CompletionDetails, CompletionResult, ProfileSnapshot};
