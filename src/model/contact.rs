use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ContactId;
use crate::error::BdayError;

/// How a contact relates to the user. Closed set; free-text relationships
/// are not accepted by the intake flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relationship {
    Family,
    Friend,
    Colleague,
    Partner,
    Acquaintance,
}

impl Relationship {
    pub const ALL: [Relationship; 5] = [
        Relationship::Family,
        Relationship::Friend,
        Relationship::Colleague,
        Relationship::Partner,
        Relationship::Acquaintance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Family => "Family",
            Relationship::Friend => "Friend",
            Relationship::Colleague => "Colleague",
            Relationship::Partner => "Partner",
            Relationship::Acquaintance => "Acquaintance",
        }
    }

    /// Lower-cased form, for use mid-sentence in message templates.
    pub fn lowercase(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = BdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "family" => Ok(Relationship::Family),
            "friend" => Ok(Relationship::Friend),
            "colleague" => Ok(Relationship::Colleague),
            "partner" => Ok(Relationship::Partner),
            "acquaintance" => Ok(Relationship::Acquaintance),
            other => Err(BdayError::UnknownRelationship {
                value: other.to_string(),
            }),
        }
    }
}

/// A person whose birthday we track.
///
/// The birthday's year is stored as entered but carries no meaning: all
/// proximity math works on the recurring month/day pair. Interests are
/// insertion-ordered and never contain two equal entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub birthday: NaiveDate,
    pub relationship: Relationship,
    #[serde(default)]
    pub interests: Vec<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Contact {
    pub fn create(name: String, birthday: NaiveDate, relationship: Relationship) -> Self {
        Self {
            id: ContactId::generate(),
            name,
            birthday,
            relationship,
            interests: Vec::new(),
            email: None,
            phone: None,
        }
    }
}
