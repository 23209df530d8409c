use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SlotError;

/// The fixed set of bookable experts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpertName {
    Person1,
    Person2,
    Person3,
    Person4,
    Person5,
}

impl ExpertName {
    /// The fixed order served by `/get_expert_list`.
    pub const ALL: [ExpertName; 5] = [
        ExpertName::Person1,
        ExpertName::Person2,
        ExpertName::Person3,
        ExpertName::Person4,
        ExpertName::Person5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpertName::Person1 => "Person1",
            ExpertName::Person2 => "Person2",
            ExpertName::Person3 => "Person3",
            ExpertName::Person4 => "Person4",
            ExpertName::Person5 => "Person5",
        }
    }
}

impl fmt::Display for ExpertName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpertName {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Person1" => Ok(ExpertName::Person1),
            "Person2" => Ok(ExpertName::Person2),
            "Person3" => Ok(ExpertName::Person3),
            "Person4" => Ok(ExpertName::Person4),
            "Person5" => Ok(ExpertName::Person5),
            other => Err(SlotError::UnknownExpert(other.to_string())),
        }
    }
}

/// Immutable expert-to-calendar lookup, built once at startup and shared
/// read-only across requests.
#[derive(Debug, Clone)]
pub struct ExpertDirectory {
    entries: Vec<(ExpertName, String)>,
}

impl ExpertDirectory {
    pub fn new(entries: Vec<(ExpertName, String)>) -> Self {
        Self { entries }
    }

    /// The built-in directory covering all five experts.
    pub fn builtin() -> Self {
        Self::new(vec![
            (
                ExpertName::Person1,
                "2bbc95bd029478d39239bdd59e976b525ba3bbf89389e46c46add3bb64abd4ad@group.calendar.google.com".to_string(),
            ),
            (
                ExpertName::Person2,
                "8a17109242b1d2f9f3abfa2c61c9738d993e686c4c3841d94604714347fe82c4@group.calendar.google.com".to_string(),
            ),
            (
                ExpertName::Person3,
                "3c4b74b53f04babf31ea8d912756449b677088a69e06bb1f051e8dcb30ae65a7@group.calendar.google.com".to_string(),
            ),
            (
                ExpertName::Person4,
                "8f1114f32c0af8ede52482cb2ff9e89d9c662496ee5d3580fae2a91690824451@group.calendar.google.com".to_string(),
            ),
            (
                ExpertName::Person5,
                "b1c742e7564f81bb20c53b01d2fa907eacc05333e480160dfa9ea221d82a23c5@group.calendar.google.com".to_string(),
            ),
        ])
    }

    /// Ordered expert identifiers, as served by `/get_expert_list`.
    pub fn names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(name, _)| name.to_string())
            .collect()
    }

    pub fn calendar_id(&self, expert: ExpertName) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == expert)
            .map(|(_, id)| id.as_str())
    }
}
