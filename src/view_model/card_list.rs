//! Card List View Model
//!
//! Owns the authoritative in-memory card collection. Every change builds a new
//! `Vec` rather than editing in place, so a render holding the old one stays valid.

use std::collections::HashSet;

use super::generation::{Generation, Ticket};
use crate::api::ApiResult;
use crate::models::{Card, CardId};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready,
}

#[derive(Debug, Clone)]
pub struct CardListModel {
    state: LoadState,
    cards: Vec<Card>,
    /// Last delete failure, shown until dismissed
    notice: Option<String>,
    deleting: Vec<CardId>,
    filter: Option<String>,
    generation: Generation,
}

impl Default for CardListModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CardListModel {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            cards: Vec::new(),
            notice: None,
            deleting: Vec::new(),
            filter: None,
            generation: Generation::default(),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ========================
    // Loading
    // ========================

    /// Start (re)loading. Any load still in flight is superseded.
    pub fn begin_load(&mut self) -> Ticket {
        self.generation.advance();
        self.state = LoadState::Loading;
        self.generation.ticket()
    }

    /// Apply a `list()` result. Returns false if the result was superseded.
    pub fn finish_load(&mut self, ticket: Ticket, result: ApiResult<Vec<Card>>) -> bool {
        if !self.generation.is_current(ticket) {
            log::debug!("Dropping superseded card list response");
            return false;
        }
        match result {
            Ok(cards) => {
                log::info!("Loaded {} cards", cards.len());
                self.cards = cards;
                self.state = LoadState::Ready;
                self.prune_filter();
            }
            Err(e) => {
                log::error!("Failed to load cards: {}", e);
                self.state = LoadState::Failed(e.user_message());
            }
        }
        true
    }

    // ========================
    // Dialog callbacks
    // ========================

    /// A card came back from create: it goes first, everything else follows
    /// in the same order.
    pub fn card_added(&mut self, card: Card) {
        self.cards = std::iter::once(card.clone())
            .chain(self.cards.iter().filter(|c| c.id != card.id).cloned())
            .collect();
    }

    /// Replace the entry with the same id
    pub fn card_updated(&mut self, card: Card) {
        self.cards = self
            .cards
            .iter()
            .map(|c| if c.id == card.id { card.clone() } else { c.clone() })
            .collect();
        self.prune_filter();
    }

    // ========================
    // Delete
    // ========================

    pub fn is_deleting(&self, id: &CardId) -> bool {
        self.deleting.contains(id)
    }

    /// Mark a delete as started. Returns false when one is already running
    /// for this card, in which case no request should be sent.
    pub fn begin_delete(&mut self, id: &CardId) -> bool {
        if self.is_deleting(id) {
            return false;
        }
        self.deleting.push(id.clone());
        true
    }

    /// The card leaves the collection only once the backend confirmed it
    pub fn finish_delete(&mut self, id: &CardId, result: ApiResult<()>) {
        self.deleting.retain(|d| d != id);
        match result {
            Ok(()) => {
                self.cards = self.cards.iter().filter(|c| &c.id != id).cloned().collect();
                self.prune_filter();
            }
            Err(e) => {
                log::error!("Failed to delete card {}: {}", id, e);
                self.notice = Some(e.user_message());
            }
        }
    }

    // ========================
    // Categories
    // ========================

    /// Union of every card's categories, first occurrence wins the position
    pub fn available_categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.cards
            .iter()
            .flat_map(|c| c.categories_names.iter())
            .filter(|name| seen.insert(name.as_str()))
            .cloned()
            .collect()
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn set_filter(&mut self, category: Option<String>) {
        self.filter = category;
    }

    /// Cards to render under the current filter
    pub fn visible_cards(&self) -> Vec<Card> {
        match &self.filter {
            Some(category) => self
                .cards
                .iter()
                .filter(|c| c.categories_names.contains(category))
                .cloned()
                .collect(),
            None => self.cards.clone(),
        }
    }

    fn prune_filter(&mut self) {
        let gone = match &self.filter {
            Some(category) => !self.cards.iter().any(|c| c.categories_names.contains(category)),
            None => false,
        };
        if gone {
            self.filter = None;
        }
    }
}
