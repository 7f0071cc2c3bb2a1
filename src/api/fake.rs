//! In-memory `CardsApi` that records every call.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use super::{ApiError, ApiResult, CardsApi};
use crate::models::{Card, CardId, CardUpdate, NewCard};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Get(CardId),
    Create(NewCard),
    Update(CardUpdate),
    Delete(CardId),
}

/// Backend stand-in. Stored cards live in `cards`; queued failures are
/// returned (oldest first) instead of touching them.
#[derive(Default)]
pub struct FakeCardsApi {
    pub cards: RefCell<Vec<Card>>,
    pub calls: RefCell<Vec<Call>>,
    failures: RefCell<VecDeque<ApiError>>,
    next_id: RefCell<i64>,
}

impl FakeCardsApi {
    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: RefCell::new(cards),
            next_id: RefCell::new(100),
            ..Default::default()
        }
    }

    pub fn fail_next(&self, error: ApiError) {
        self.failures.borrow_mut().push_back(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        match self.failures.borrow_mut().pop_front() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl CardsApi for FakeCardsApi {
    async fn list(&self) -> ApiResult<Vec<Card>> {
        self.record(Call::List)?;
        Ok(self.cards.borrow().clone())
    }

    async fn get(&self, id: &CardId) -> ApiResult<Option<Card>> {
        self.record(Call::Get(id.clone()))?;
        Ok(self.cards.borrow().iter().find(|c| &c.id == id).cloned())
    }

    async fn create(&self, card: &NewCard) -> ApiResult<Card> {
        self.record(Call::Create(card.clone()))?;
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        let created = Card {
            id: CardId::Number(id),
            title: card.title.clone(),
            description: card.description.clone(),
            categories_names: card.categories.clone(),
            created: "2024-06-01T09:30:00Z".to_string(),
        };
        self.cards.borrow_mut().insert(0, created.clone());
        Ok(created)
    }

    async fn update(&self, update: &CardUpdate) -> ApiResult<Option<Card>> {
        self.record(Call::Update(update.clone()))?;
        let mut cards = self.cards.borrow_mut();
        let stored = cards
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| ApiError::Status { status: 400, message: "Card not found".to_string() })?;
        *stored = stored.with_edits(&update.title, &update.description, &update.categories);
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: &CardId) -> ApiResult<()> {
        self.record(Call::Delete(id.clone()))?;
        self.cards.borrow_mut().retain(|c| &c.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_card;

    #[tokio::test]
    async fn test_get_finds_stored_card() {
        let api = FakeCardsApi::with_cards(vec![make_card("a", "A", &[]), make_card("b", "B", &["Work"])]);

        let found = api.get(&CardId::from("b")).await.unwrap().unwrap();
        assert_eq!(found.title, "B");
        assert_eq!(api.calls(), vec![Call::Get(CardId::from("b"))]);
    }

    #[tokio::test]
    async fn test_get_missing_and_failing() {
        let api = FakeCardsApi::with_cards(vec![make_card("a", "A", &[])]);
        assert_eq!(api.get(&CardId::Number(404)).await, Ok(None));

        api.fail_next(ApiError::Transport("offline".to_string()));
        assert!(api.get(&CardId::from("a")).await.is_err());
        assert_eq!(api.calls().len(), 2);
    }
}
