use crate::domain::model::RawItem;
use crate::utils::error::{EtlError, Result};
use reqwest::Client;
use serde::{Deserialize, Deserializer};

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Narrows a free-text course name towards schedulable course listings.
pub fn widen_query(query: &str) -> String {
    format!(
        "{} (course OR training OR workshop OR certificate) (register OR schedule OR dates OR start)",
        query.trim()
    )
}

#[derive(Debug, Default, Deserialize)]
struct SearchPayload {
    #[serde(default, deserialize_with = "null_as_empty_list")]
    items: Vec<RawItem>,
}

fn null_as_empty_list<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<RawItem>, D::Error> {
    Ok(Option::<Vec<RawItem>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Client for a Custom-Search-style JSON endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    endpoint: String,
    api_key: String,
    engine_id: String,
}

impl SearchClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>, engine_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            engine_id: engine_id.into(),
        }
    }

    /// Fetches up to `max_results` raw hits for the user's `query`.
    pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<RawItem>> {
        let q = widen_query(query);
        let num = max_results.to_string();
        tracing::debug!("Searching {} for: {}", self.endpoint, q);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", q.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Search response status: {}", status);
        if !status.is_success() {
            return Err(EtlError::SearchProviderError {
                status: status.as_u16(),
            });
        }

        let payload: SearchPayload = response.json().await?;
        let mut items = payload.items;
        items.truncate(max_results);
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_widen_query() {
        assert_eq!(
            widen_query("  welding yanbu "),
            "welding yanbu (course OR training OR workshop OR certificate) (register OR schedule OR dates OR start)"
        );
    }

    #[tokio::test]
    async fn test_search_sends_credentials_and_parses_items() {
        let server = MockServer::start();
        let expected_q = widen_query("welding");
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/customsearch/v1")
                .query_param("key", "test-key")
                .query_param("cx", "test-cx")
                .query_param("q", expected_q.as_str())
                .query_param("num", "10");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "kind": "customsearch#search",
                    "items": [
                        {"title": "Welding Course", "snippet": "Riyadh, Saudi Arabia", "link": "https://a.sa/w", "displayLink": "a.sa"},
                        {"title": "No snippet", "link": "https://b.com"}
                    ]
                }));
        });

        let client = SearchClient::new(server.url("/customsearch/v1"), "test-key", "test-cx");
        let items = client.search("welding", 10).await.unwrap();

        api_mock.assert();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Welding Course");
        assert_eq!(items[0].link, "https://a.sa/w");
        assert_eq!(items[1].snippet, "");
    }

    #[tokio::test]
    async fn test_search_without_items_is_empty() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/customsearch/v1");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"kind": "customsearch#search"}));
        });

        let client = SearchClient::new(server.url("/customsearch/v1"), "k", "cx");
        let items = client.search("welding", 10).await.unwrap();

        api_mock.assert();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_search_null_fields_become_empty() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/customsearch/v1");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "items": [
                        {"title": null, "snippet": "Welding course", "link": "https://a.com"},
                        {"title": "Welding Training", "snippet": null, "link": null}
                    ]
                }));
        });

        let client = SearchClient::new(server.url("/customsearch/v1"), "k", "cx");
        let items = client.search("welding", 10).await.unwrap();

        api_mock.assert();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "");
        assert_eq!(items[0].snippet, "Welding course");
        assert_eq!(items[1].snippet, "");
        assert_eq!(items[1].link, "");
    }

    #[tokio::test]
    async fn test_search_null_items_is_empty() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/customsearch/v1");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"kind": "customsearch#search", "items": null}));
        });

        let client = SearchClient::new(server.url("/customsearch/v1"), "k", "cx");
        let items = client.search("welding", 10).await.unwrap();

        api_mock.assert();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_search_provider_failure_is_an_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/customsearch/v1");
            then.status(403);
        });

        let client = SearchClient::new(server.url("/customsearch/v1"), "bad", "cx");
        let err = client.search("welding", 10).await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, EtlError::SearchProviderError { status: 403 }));
    }
}
