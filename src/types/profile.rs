use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flattened profile fields considered when scoring completeness.
///
/// List records are opaque to the scorer; only their count matters. Callers
/// holding raw upstream JSON should go through [`crate::input::parse_snapshot`]
/// rather than building this by hand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub bio: Option<String>,
    pub education: Option<Vec<Value>>,
    pub work_history: Option<Vec<Value>>,
}

/// Per-category badge flags. Each flag has its own threshold and does not
/// follow the partial credit awarded to the numeric score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionDetails {
    pub basic_info: bool,
    pub contact: bool,
    pub address: bool,
    pub professional: bool,
    pub education: bool,
    pub work: bool,
    pub bio: bool,
}

impl CompletionDetails {
    pub fn all(&self) -> bool {
        self.basic_info
            && self.contact
            && self.address
            && self.professional
            && self.education
            && self.work
            && self.bio
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompletionResult {
    pub percent: u8,
    pub details: CompletionDetails,
}

/// A completion result together with the breakdown it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredProfile {
    pub result: CompletionResult,
    pub categories: Vec<CategoryScore>,
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    BasicInfo,
    Contact,
    Address,
    Professional,
    Education,
    Work,
    Bio,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::BasicInfo,
        Category::Contact,
        Category::Address,
        Category::Professional,
        Category::Education,
        Category::Work,
        Category::Bio,
    ];

    /// Key used in config files.
    pub fn config_key(self) -> &'static str {
        match self {
            Category::BasicInfo => "basic_info",
            Category::Contact => "contact",
            Category::Address => "address",
            Category::Professional => "professional",
            Category::Education => "education",
            Category::Work => "work",
            Category::Bio => "bio",
        }
    }

    /// Key used in rendered reports, matching the detail flag names.
    pub fn report_key(self) -> &'static str {
        match self {
            Category::BasicInfo => "basicInfo",
            Category::Contact => "contact",
            Category::Address => "address",
            Category::Professional => "professional",
            Category::Education => "education",
            Category::Work => "work",
            Category::Bio => "bio",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub present: usize,
    pub total: usize,
    pub points: f64,
    pub weight: f64,
    pub complete: bool,
}
