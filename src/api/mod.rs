//! REST Client
//!
//! Bindings to the `/cards` backend resource.

mod envelope;
mod error;
mod http;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::models::{Card, CardId, CardUpdate, NewCard};

pub use error::{ApiError, ApiResult};
pub use http::HttpCardsApi;

/// The five card operations the UI needs.
///
/// Futures are not `Send`: in the browser everything runs on the event loop.
#[async_trait(?Send)]
pub trait CardsApi {
    /// Whole collection, in backend order
    async fn list(&self) -> ApiResult<Vec<Card>>;

    /// One card by id; `None` when the backend has no match
    async fn get(&self, id: &CardId) -> ApiResult<Option<Card>>;

    /// Create and return the stored card (with backend id and timestamp)
    async fn create(&self, card: &NewCard) -> ApiResult<Card>;

    /// Persist edits; returns the backend's echo of the card when it sent one
    async fn update(&self, update: &CardUpdate) -> ApiResult<Option<Card>>;

    async fn delete(&self, id: &CardId) -> ApiResult<()>;
}
