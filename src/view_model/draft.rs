//! Card Draft
//!
//! Unsaved form state shared by the create and edit dialogs.

use crate::models::{Card, CardId, CardUpdate, NewCard};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardDraft {
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
}

impl CardDraft {
    pub fn from_card(card: &Card) -> Self {
        Self {
            title: card.title.clone(),
            description: card.description.clone(),
            categories: card.categories_names.clone(),
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Add a category unless it is blank or already present.
    /// A case-insensitive match in `known` reuses that spelling.
    /// Returns whether the draft changed.
    pub fn add_category(&mut self, name: &str, known: &[String]) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let name = known
            .iter()
            .find(|k| k.to_lowercase() == name.to_lowercase())
            .map(String::as_str)
            .unwrap_or(name);
        if self.categories.iter().any(|c| c == name) {
            return false;
        }
        self.categories = self
            .categories
            .iter()
            .cloned()
            .chain(std::iter::once(name.to_string()))
            .collect();
        true
    }

    pub fn remove_category(&mut self, name: &str) {
        self.categories = self.categories.iter().filter(|c| *c != name).cloned().collect();
    }

    /// Validated POST body; title and description are trimmed
    pub fn to_new_card(&self) -> Result<NewCard, ValidationError> {
        if !self.has_title() {
            return Err(ValidationError::TitleRequired);
        }
        Ok(NewCard {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            categories: self.categories.clone(),
        })
    }

    /// Validated PUT body for `id`
    pub fn to_update(&self, id: &CardId) -> Result<CardUpdate, ValidationError> {
        let NewCard { title, description, categories } = self.to_new_card()?;
        Ok(CardUpdate { id: id.clone(), title, description, categories })
    }
}
