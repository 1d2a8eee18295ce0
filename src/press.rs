//! PRESS.one API client for publishing auction collections

use crate::error::Result;
use crate::showcase::CollectionRequest;
use reqwest::Client;
use serde::Deserialize;

/// PRESS.one collection endpoint
const COLLECTIONS_URL: &str = "https://dev.press.one/api/v2/nft/collections";

#[derive(Debug, Deserialize)]
struct PublishResponse {
    #[serde(rename = "showcaseUrl", default)]
    showcase_url: Option<String>,
}

/// Client for the PRESS.one collection endpoint
pub struct PressClient {
    client: Client,
    pub(crate) collections_url: String,
    authorization_token: String,
}

impl PressClient {
    /// `authorization_token` is sent as-is after `Basic `, it must already be encoded
    pub fn new(authorization_token: &str) -> Self {
        Self {
            client: Client::new(),
            collections_url: COLLECTIONS_URL.to_string(),
            authorization_token: authorization_token.to_string(),
        }
    }

    /// Point the client at a different collection endpoint
    pub fn with_collections_url(mut self, url: &str) -> Self {
        self.collections_url = url.to_string();
        self
    }

    /// POST a collection and return its showcase URL, if PRESS.one sent one back
    pub async fn publish(&self, request: &CollectionRequest) -> Result<Option<String>> {
        let body = serde_json::to_string(request)?;
        log::info!("{}", body);

        let response = self
            .client
            .post(&self.collections_url)
            .header("Content-Type", "application/json")
            .header(
                "Authorization",
                format!("Basic {}", self.authorization_token),
            )
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("PRESS.one responded with HTTP {}", status);
        }

        let text = response.text().await?;
        let result: PublishResponse = serde_json::from_str(&text)?;

        if let Some(ref url) = result.showcase_url {
            log::info!("external url: {}", url);
        }

        Ok(result.showcase_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShowcaseError;
    use crate::showcase::{DigitalCollectible, Media};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_with_mock(mock_uri: &str) -> PressClient {
        PressClient::new("dG9rZW4=").with_collections_url(&format!(
            "{}/api/v2/nft/collections",
            mock_uri
        ))
    }

    fn sample_request() -> CollectionRequest {
        CollectionRequest {
            digital_collectibles: DigitalCollectible {
                uuid: "g1".to_string(),
                contract_address: "0xabc".to_string(),
                token_id: "7".to_string(),
                media: vec![Media {
                    url: "https://cdn/p1.png".to_string(),
                }],
            },
            bids: vec![],
        }
    }

    #[test]
    fn test_default_endpoint() {
        let client = PressClient::new("t");
        assert_eq!(
            client.collections_url,
            "https://dev.press.one/api/v2/nft/collections"
        );
    }

    #[tokio::test]
    async fn publish_sends_headers_and_body() {
        let mock_server = MockServer::start().await;
        let client = client_with_mock(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/api/v2/nft/collections"))
            .and(header("Content-Type", "application/json"))
            .and(header("Authorization", "Basic dG9rZW4="))
            .and(body_json(serde_json::json!({
                "digital_collectibles": {
                    "uuid": "g1",
                    "contract_address": "0xabc",
                    "token_id": "7",
                    "media": [{ "url": "https://cdn/p1.png" }]
                },
                "bids": []
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "showcaseUrl": "https://press.one/showcase/g1"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = client.publish(&sample_request()).await.unwrap();
        assert_eq!(url.as_deref(), Some("https://press.one/showcase/g1"));
    }

    #[tokio::test]
    async fn publish_without_showcase_url_succeeds() {
        let mock_server = MockServer::start().await;
        let client = client_with_mock(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/api/v2/nft/collections"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 12,
                "status": "created"
            })))
            .mount(&mock_server)
            .await;

        let url = client.publish(&sample_request()).await.unwrap();
        assert_eq!(url, None);
    }

    #[tokio::test]
    async fn publish_malformed_response_is_parse_error() {
        let mock_server = MockServer::start().await;
        let client = client_with_mock(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/api/v2/nft/collections"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&mock_server)
            .await;

        let result = client.publish(&sample_request()).await;
        assert!(matches!(result, Err(ShowcaseError::Parse(_))));
    }

    #[tokio::test]
    async fn publish_connection_refused_is_network_error() {
        let client =
            PressClient::new("t").with_collections_url("http://127.0.0.1:1/collections");

        let result = client.publish(&sample_request()).await;
        assert!(matches!(result, Err(ShowcaseError::Network(_))));
    }
}
