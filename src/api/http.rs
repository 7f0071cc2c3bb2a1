//! HTTP Cards Client
//!
//! `reqwest` rides on `fetch` in the browser.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;

use super::envelope::{interpret, interpret_ack, interpret_echo, OneOrMany};
use super::error::ApiResult;
use super::CardsApi;
use crate::config::ApiConfig;
use crate::models::{Card, CardId, CardRef, CardUpdate, NewCard};

#[derive(Clone, Debug)]
pub struct HttpCardsApi {
    client: Client,
    base_url: String,
}

impl HttpCardsApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    /// `/cards` is listed without a trailing slash, everything else uses `/cards/`
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
    }

    fn with_json<B: Serialize>(builder: RequestBuilder, body: &B) -> ApiResult<RequestBuilder> {
        Ok(builder.body(serde_json::to_string(body)?))
    }

    // ========================
    // Requests
    // ========================

    fn list_request(&self) -> RequestBuilder {
        self.request(Method::GET, "/cards")
    }

    fn get_request(&self, id: &CardId) -> RequestBuilder {
        self.request(Method::GET, "/cards/")
            .query(&[("id", id.to_string())])
    }

    fn create_request(&self, card: &NewCard) -> ApiResult<RequestBuilder> {
        Self::with_json(self.request(Method::POST, "/cards/"), card)
    }

    fn update_request(&self, update: &CardUpdate) -> ApiResult<RequestBuilder> {
        Self::with_json(self.request(Method::PUT, "/cards/"), update)
    }

    fn delete_request(&self, id: &CardId) -> ApiResult<RequestBuilder> {
        Self::with_json(self.request(Method::DELETE, "/cards/"), &CardRef { id })
    }

    /// Send and hand back `(status, body)`
    async fn exchange(builder: RequestBuilder) -> ApiResult<(u16, String)> {
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl CardsApi for HttpCardsApi {
    async fn list(&self) -> ApiResult<Vec<Card>> {
        let (status, body) = Self::exchange(self.list_request()).await?;
        interpret(status, &body, "Failed to load cards").inspect_err(|e| {
            log::warn!("Listing cards failed: {}", e);
        })
    }

    async fn get(&self, id: &CardId) -> ApiResult<Option<Card>> {
        let (status, body) = Self::exchange(self.get_request(id)).await?;
        let payload: OneOrMany = interpret(status, &body, "Failed to load card")?;
        payload.into_single(id)
    }

    async fn create(&self, card: &NewCard) -> ApiResult<Card> {
        let (status, body) = Self::exchange(self.create_request(card)?).await?;
        interpret(status, &body, "Failed to create card").inspect_err(|e| {
            log::error!("Failed to create card: {}", e);
        })
    }

    async fn update(&self, update: &CardUpdate) -> ApiResult<Option<Card>> {
        let (status, body) = Self::exchange(self.update_request(update)?).await?;
        // The edited card is merged locally; the echo is only used to spot drift.
        interpret_echo(status, &body, "Failed to update card").inspect_err(|e| {
            log::error!("Update failed: {}", e);
        })
    }

    async fn delete(&self, id: &CardId) -> ApiResult<()> {
        let (status, body) = Self::exchange(self.delete_request(id)?).await?;
        interpret_ack(status, &body, "Failed to delete card").inspect_err(|e| {
            log::error!("Delete failed: {}", e);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Request;

    fn api() -> HttpCardsApi {
        HttpCardsApi::new(&ApiConfig::from_values(Some("https://h/api/"), None))
    }

    fn body_json(request: &Request) -> serde_json::Value {
        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        serde_json::from_slice(bytes).unwrap()
    }

    fn assert_json_header_only(request: &Request) {
        let headers = request.headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn test_urls_follow_base() {
        let api = api();
        assert_eq!(api.url("/cards"), "https://h/api/cards");
        assert_eq!(api.url("/cards/"), "https://h/api/cards/");
    }

    #[test]
    fn test_list_request() {
        let request = api().list_request().build().unwrap();
        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.url().as_str(), "https://h/api/cards");
        assert!(request.body().is_none());
        assert_json_header_only(&request);
    }

    #[test]
    fn test_get_request_queries_id() {
        let request = api().get_request(&CardId::Number(9)).build().unwrap();
        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.url().as_str(), "https://h/api/cards/?id=9");
        assert_json_header_only(&request);
    }

    #[test]
    fn test_create_request() {
        let card = NewCard {
            title: "T".to_string(),
            description: "d".to_string(),
            categories: vec!["Work".to_string()],
        };
        let request = api().create_request(&card).unwrap().build().unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.url().as_str(), "https://h/api/cards/");
        assert_json_header_only(&request);
        assert_eq!(
            body_json(&request),
            serde_json::json!({ "title": "T", "description": "d", "categories": ["Work"] })
        );
    }

    #[test]
    fn test_update_request_carries_edits() {
        let update = CardUpdate {
            id: CardId::Number(9),
            title: "T".to_string(),
            description: "d".to_string(),
            categories: vec!["Work".to_string()],
        };
        let request = api().update_request(&update).unwrap().build().unwrap();
        assert_eq!(request.method(), &Method::PUT);
        assert_eq!(request.url().as_str(), "https://h/api/cards/");
        assert_json_header_only(&request);
        assert_eq!(
            body_json(&request),
            serde_json::json!({ "id": 9, "title": "T", "description": "d", "categories": ["Work"] })
        );
    }

    #[test]
    fn test_delete_request_sends_id_only() {
        let request = api().delete_request(&CardId::from("x")).unwrap().build().unwrap();
        assert_eq!(request.method(), &Method::DELETE);
        assert_eq!(request.url().as_str(), "https://h/api/cards/");
        assert_json_header_only(&request);
        assert_eq!(body_json(&request), serde_json::json!({ "id": "x" }));
    }
}
