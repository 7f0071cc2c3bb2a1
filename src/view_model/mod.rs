//! View Models
//!
//! Plain state objects behind the components. Their methods are the only way
//! state changes; components keep them in signals and call `begin_*` before a
//! request and `finish_*` with its result.

mod card_list;
mod create_dialog;
mod detail_dialog;
mod draft;
mod generation;

pub use card_list::{CardListModel, LoadState};
pub use create_dialog::CreateDialogModel;
pub use detail_dialog::{DetailDialogModel, Mode};
use draft::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("A request is already running")]
    Busy,
    #[error("Not in edit mode")]
    NotEditing,
}
