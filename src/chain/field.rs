use serde::{Deserialize, Serialize};
use std::fmt;

/// LinkedIn profile fields a fix chain can fetch a replacement value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkedInField {
    FirstName,
    LastName,
    Company,
    Title,
    Headline,
    Location,
}

impl LinkedInField {
    /// All fetchable fields, in the order the configuration dialog lists them.
    pub const ALL: [LinkedInField; 6] = [
        LinkedInField::FirstName,
        LinkedInField::LastName,
        LinkedInField::Company,
        LinkedInField::Title,
        LinkedInField::Headline,
        LinkedInField::Location,
    ];

    /// The camelCase name used in persisted payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkedInField::FirstName => "firstName",
            LinkedInField::LastName => "lastName",
            LinkedInField::Company => "company",
            LinkedInField::Title => "title",
            LinkedInField::Headline => "headline",
            LinkedInField::Location => "location",
        }
    }

    /// Resolves a persisted field name. Unknown names yield `None` so the
    /// caller can degrade instead of failing.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == value)
    }
}

impl fmt::Display for LinkedInField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
