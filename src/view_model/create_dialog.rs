//! Create Dialog View Model

use super::draft::{CardDraft, ValidationError};
use super::generation::{Generation, Ticket};
use super::DialogError;
use crate::api::ApiResult;
use crate::models::{Card, NewCard};

#[derive(Debug, Clone, Default)]
pub struct CreateDialogModel {
    pub draft: CardDraft,
    open: bool,
    busy: bool,
    error: Option<String>,
    generation: Generation,
}

impl CreateDialogModel {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close and throw the draft away. Refused while a create is running, so a
    /// card the backend accepted always reaches the list.
    pub fn close(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.reset();
        true
    }

    fn reset(&mut self) {
        self.open = false;
        self.busy = false;
        self.error = None;
        self.draft = CardDraft::default();
        self.generation.advance();
    }

    /// Validate and mark busy. On `Ok` the caller sends exactly this body.
    pub fn begin_submit(&mut self) -> Result<(Ticket, NewCard), DialogError> {
        if self.busy {
            return Err(DialogError::Busy);
        }
        let card = self.draft.to_new_card().map_err(|e: ValidationError| {
            self.error = Some(e.to_string());
            DialogError::from(e)
        })?;
        self.busy = true;
        self.error = None;
        Ok((self.generation.ticket(), card))
    }

    /// Apply the create result. Returns the stored card for the list view on
    /// success; on failure the dialog stays open with its draft.
    pub fn finish_submit(&mut self, ticket: Ticket, result: ApiResult<Card>) -> Option<Card> {
        if !self.generation.is_current(ticket) {
            if let Ok(card) = &result {
                log::warn!("Create dialog closed before card {} was confirmed", card.id);
            }
            return None;
        }
        self.busy = false;
        match result {
            Ok(card) => {
                self.reset();
                Some(card)
            }
            Err(e) => {
                self.error = Some(e.user_message());
                None
            }
        }
    }
}
