//! UI Components
//!
//! Reusable Leptos components.

mod add_card_button;
mod card_detail_dialog;
mod card_tile;
mod cards_page;
mod category_filter_bar;
mod category_input;
mod create_card_dialog;
mod delete_confirm_button;
mod modal;

pub use add_card_button::AddCardButton;
pub use card_detail_dialog::CardDetailDialog;
pub use card_tile::CardTile;
pub use cards_page::CardsPage;
pub use category_filter_bar::CategoryFilterBar;
pub use category_input::CategoryInput;
pub use create_card_dialog::CreateCardDialog;
pub use delete_confirm_button::DeleteConfirmButton;
pub use modal::Modal;
