//! Detail/Edit Dialog View Model
//!
//! `Viewing -> Editing -> (saved | cancelled) -> Viewing`.
//! A failed save stays in `Editing` with the draft intact.

use super::draft::CardDraft;
use super::generation::{Generation, Ticket};
use super::DialogError;
use crate::api::ApiResult;
use crate::models::{Card, CardUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Viewing,
    Editing,
}

#[derive(Debug, Clone, Default)]
pub struct DetailDialogModel {
    card: Option<Card>,
    mode: Mode,
    pub draft: CardDraft,
    busy: bool,
    error: Option<String>,
    generation: Generation,
}

impl DetailDialogModel {
    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Show a card (or switch to another one): draft is reseeded, edits and
    /// pending saves for the previous card are dropped.
    pub fn show(&mut self, card: Card) {
        self.draft = CardDraft::from_card(&card);
        self.card = Some(card);
        self.reset();
    }

    /// Refused while a save is running, like `cancel_edit`
    pub fn close(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.card = None;
        self.draft = CardDraft::default();
        self.reset();
        true
    }

    fn reset(&mut self) {
        self.mode = Mode::Viewing;
        self.busy = false;
        self.error = None;
        self.generation.advance();
    }

    pub fn begin_edit(&mut self) {
        if let Some(card) = &self.card {
            self.draft = CardDraft::from_card(card);
            self.mode = Mode::Editing;
            self.error = None;
        }
    }

    /// Back to the last saved values. Ignored while a save is running.
    pub fn cancel_edit(&mut self) {
        if self.busy {
            return;
        }
        if let Some(card) = &self.card {
            self.draft = CardDraft::from_card(card);
        }
        self.mode = Mode::Viewing;
        self.error = None;
    }

    pub fn begin_save(&mut self) -> Result<(Ticket, CardUpdate), DialogError> {
        if self.busy {
            return Err(DialogError::Busy);
        }
        let card = match (&self.card, self.mode) {
            (Some(card), Mode::Editing) => card,
            _ => return Err(DialogError::NotEditing),
        };
        match self.draft.to_update(&card.id) {
            Ok(update) => {
                self.busy = true;
                self.error = None;
                Ok((self.generation.ticket(), update))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Apply the update result. On success the edited fields are merged into a
    /// copy of the shown card, which is returned for the list view.
    pub fn finish_save(
        &mut self,
        ticket: Ticket,
        sent: &CardUpdate,
        result: ApiResult<Option<Card>>,
    ) -> Option<Card> {
        if !self.generation.is_current(ticket) {
            log::debug!("Dropping update response for card {}", sent.id);
            return None;
        }
        self.busy = false;
        let echoed = match result {
            Ok(echoed) => echoed,
            Err(e) => {
                self.error = Some(e.user_message());
                return None;
            }
        };
        let original = self.card.as_ref()?;
        let merged = original.with_edits(&sent.title, &sent.description, &sent.categories);
        if let Some(server) = echoed.filter(|s| !s.same_content(&merged)) {
            log::warn!(
                "Card {} differs on the server after update (title {:?}, categories {:?})",
                merged.id,
                server.title,
                server.categories_names
            );
        }
        self.draft = CardDraft::from_card(&merged);
        self.card = Some(merged.clone());
        self.mode = Mode::Viewing;
        self.error = None;
        Some(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeCardsApi};
    use crate::api::{ApiError, CardsApi};
    use crate::models::make_card;
    use crate::view_model::CardListModel;

    async fn save(model: &mut DetailDialogModel, api: &FakeCardsApi) -> Option<Card> {
        let (ticket, update) = model.begin_save().ok()?;
        let result = api.update(&update).await;
        model.finish_save(ticket, &update, result)
    }

    fn editing(card: &Card) -> DetailDialogModel {
        let mut model = DetailDialogModel::default();
        model.show(card.clone());
        model.begin_edit();
        model
    }

    #[test]
    fn test_opens_in_viewing() {
        let mut model = DetailDialogModel::default();
        model.show(make_card("1", "A", &["Work"]));
        assert_eq!(model.mode(), Mode::Viewing);
        assert_eq!(model.draft.title, "A");
        assert_eq!(model.draft.categories, vec!["Work"]);
    }

    #[tokio::test]
    async fn test_save_merges_and_returns_to_viewing() {
        let card = make_card("7", "Old", &["A"]);
        let api = FakeCardsApi::with_cards(vec![card.clone()]);
        let mut model = editing(&card);
        model.draft.title = "New".to_string();
        model.draft.description = "body".to_string();
        model.draft.add_category("B", &[]);

        let updated = save(&mut model, &api).await.unwrap();

        assert_eq!(updated.id, card.id);
        assert_eq!(updated.created, card.created);
        assert_eq!(updated.title, "New");
        assert_eq!(updated.categories_names, vec!["A", "B"]);
        assert_eq!(model.mode(), Mode::Viewing);
        assert_eq!(model.card(), Some(&updated));
        assert_eq!(
            api.calls(),
            vec![Call::Update(CardUpdate {
                id: card.id.clone(),
                title: "New".to_string(),
                description: "body".to_string(),
                categories: vec!["A".to_string(), "B".to_string()],
            })]
        );
    }

    #[tokio::test]
    async fn test_blank_title_stays_editing() {
        let card = make_card("7", "Old", &[]);
        let api = FakeCardsApi::with_cards(vec![card.clone()]);
        let mut model = editing(&card);
        model.draft.title = " ".to_string();

        assert!(save(&mut model, &api).await.is_none());
        assert!(api.calls().is_empty());
        assert_eq!(model.mode(), Mode::Editing);
        assert_eq!(model.error(), Some("Title is required"));
    }

    #[tokio::test]
    async fn test_failed_save_keeps_draft() {
        let card = make_card("7", "Old", &[]);
        let api = FakeCardsApi::with_cards(vec![card.clone()]);
        api.fail_next(ApiError::Transport("offline".to_string()));
        let mut model = editing(&card);
        model.draft.title = "Draft".to_string();

        assert!(save(&mut model, &api).await.is_none());
        assert_eq!(model.mode(), Mode::Editing);
        assert_eq!(model.draft.title, "Draft");
        assert_eq!(model.error(), Some("Could not reach the server"));
        assert_eq!(model.card().unwrap().title, "Old");
    }

    #[test]
    fn test_cancel_restores_last_saved() {
        let card = make_card("7", "Old", &["A"]);
        let mut model = editing(&card);
        model.draft.title = "Scratch".to_string();
        model.draft.remove_category("A");

        model.cancel_edit();

        assert_eq!(model.mode(), Mode::Viewing);
        assert_eq!(model.draft, CardDraft::from_card(&card));
    }

    #[test]
    fn test_switching_card_reseeds_and_drops_pending_save() {
        let first = make_card("1", "First", &[]);
        let mut model = editing(&first);
        model.draft.title = "Edited".to_string();
        let (ticket, update) = model.begin_save().unwrap();

        let second = make_card("2", "Second", &["X"]);
        model.show(second.clone());
        assert_eq!(model.draft, CardDraft::from_card(&second));

        assert!(model.finish_save(ticket, &update, Ok(None)).is_none());
        assert_eq!(model.card(), Some(&second));
        assert!(!model.is_busy());
    }

    #[tokio::test]
    async fn test_close_refused_while_save_runs() {
        let card = make_card("7", "Old", &[]);
        let api = FakeCardsApi::with_cards(vec![card.clone()]);
        let mut model = editing(&card);
        model.draft.title = "New".to_string();
        let (ticket, update) = model.begin_save().unwrap();

        assert!(!model.close());
        assert_eq!(model.card(), Some(&card));

        let result = api.update(&update).await;
        let updated = model.finish_save(ticket, &update, result).unwrap();
        assert_eq!(updated.title, "New");
        assert!(model.close());
        assert!(model.card().is_none());
    }

    #[test]
    fn test_save_requires_edit_mode() {
        let mut model = DetailDialogModel::default();
        model.show(make_card("1", "A", &[]));
        assert_eq!(model.begin_save().unwrap_err(), DialogError::NotEditing);
    }

    #[tokio::test]
    async fn test_list_reflects_update() {
        let card = make_card("b", "B", &["Old"]);
        let api = FakeCardsApi::with_cards(vec![card.clone()]);
        let mut list = CardListModel::new();
        let ticket = list.begin_load();
        list.finish_load(ticket, api.list().await);

        let mut model = editing(&card);
        model.draft.title = "B2".to_string();
        model.draft.categories = vec!["Fresh".to_string()];
        let updated = save(&mut model, &api).await.unwrap();
        list.card_updated(updated);

        assert_eq!(list.cards()[0].title, "B2");
        assert_eq!(list.cards()[0].created, card.created);
        assert_eq!(list.available_categories(), vec!["Fresh"]);
    }
}
