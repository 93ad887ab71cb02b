//! Career track vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Career tracks a bootcamp may advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Career {
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Mobile Development")]
    MobileDevelopment,
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Data Science")]
    DataScience,
    Business,
    Other,
}

impl Career {
    /// Every accepted career, in vocabulary order.
    pub const ALL: [Self; 6] = [
        Self::WebDevelopment,
        Self::MobileDevelopment,
        Self::UiUx,
        Self::DataScience,
        Self::Business,
        Self::Other,
    ];

    /// Wire label for the career.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WebDevelopment => "Web Development",
            Self::MobileDevelopment => "Mobile Development",
            Self::UiUx => "UI/UX",
            Self::DataScience => "Data Science",
            Self::Business => "Business",
            Self::Other => "Other",
        }
    }
}

/// Error returned when parsing a career label outside the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseCareerError;

impl fmt::Display for Career {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ParseCareerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid career")
    }
}

impl std::error::Error for ParseCareerError {}

impl FromStr for Career {
    type Err = ParseCareerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|career| career.as_str() == value)
            .ok_or(ParseCareerError)
    }
}
