use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Canonical work type names, in display order.
pub const CANONICAL_WORK_TYPES: [&str; 7] = [
    "Experiment",
    "Coding",
    "Analysis",
    "Planning",
    "Meeting",
    "Review",
    "Other",
];

/// Category of a logged entry.
///
/// The closed set covers the common categories; anything else is carried
/// verbatim in `Other`, so historical free-text values round-trip through
/// the TEXT column unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkType {
    Experiment,
    Coding,
    Analysis,
    Planning,
    Meeting,
    Review,
    Other(String),
}

impl WorkType {
    /// Get the stored label for this work type.
    pub fn as_str(&self) -> &str {
        match self {
            WorkType::Experiment => "Experiment",
            WorkType::Coding => "Coding",
            WorkType::Analysis => "Analysis",
            WorkType::Planning => "Planning",
            WorkType::Meeting => "Meeting",
            WorkType::Review => "Review",
            WorkType::Other(label) => label,
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkType {
    type Err = Infallible;

    /// Parse a work type label. Canonical names match case-insensitively;
    /// any other text becomes `Other` with the trimmed input preserved.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.to_ascii_lowercase().as_str() {
            "experiment" => WorkType::Experiment,
            "coding" => WorkType::Coding,
            "analysis" => WorkType::Analysis,
            "planning" => WorkType::Planning,
            "meeting" => WorkType::Meeting,
            "review" => WorkType::Review,
            "other" => WorkType::Other("Other".to_string()),
            _ => WorkType::Other(trimmed.to_string()),
        };
        Ok(parsed)
    }
}

impl From<String> for WorkType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<WorkType> for String {
    fn from(kind: WorkType) -> Self {
        kind.as_str().to_string()
    }
}
