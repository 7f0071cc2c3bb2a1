//! Frontend Models
//!
//! Data structures matching the `/cards` backend resource.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-assigned card identifier.
///
/// The backend hands out integers, but the client treats the id as opaque and
/// echoes it back in whatever JSON form it arrived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardId::Number(n) => write!(f, "{}", n),
            CardId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CardId {
    fn from(n: i64) -> Self {
        CardId::Number(n)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        CardId::Text(s.to_string())
    }
}

/// Card data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories_names: Vec<String>,
    /// Raw backend timestamp, formatted for display by `crate::format`
    pub created: String,
}

impl Card {
    /// Copy of this card with the editable fields replaced.
    /// `id` and `created` are carried over untouched.
    pub fn with_edits(&self, title: &str, description: &str, categories: &[String]) -> Card {
        Card {
            title: title.to_string(),
            description: description.to_string(),
            categories_names: categories.to_vec(),
            ..self.clone()
        }
    }

    /// True when the editable fields match another card's
    pub fn same_content(&self, other: &Card) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.categories_names == other.categories_names
    }
}

// ========================
// Request Bodies
// ========================

/// POST body for creating a card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCard {
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
}

/// PUT body for updating a card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardUpdate {
    pub id: CardId,
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
}

/// DELETE body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardRef<'a> {
    pub id: &'a CardId,
}

#[cfg(test)]
pub(crate) fn make_card(id: &str, title: &str, categories: &[&str]) -> Card {
    Card {
        id: CardId::from(id),
        title: title.to_string(),
        description: format!("about {}", title),
        categories_names: categories.iter().map(|c| c.to_string()).collect(),
        created: "2024-03-05T14:07:00Z".to_string(),
    }
}
