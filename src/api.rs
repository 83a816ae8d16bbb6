use crate::{
    config::get_config,
    constants::CHAT_CATEGORY,
    errors::{CharlaError, CharlaResult},
    models::{ChatRequest, ChatResponse},
};
use reqwest::Client;

/// HTTP gateway to the assistant backend. Two endpoints, no retry, no
/// client-side timeout; a hung request is resolved by the transport alone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(get_config().api_base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probes `GET /health`. Any 2xx counts as reachable; a non-2xx status
    /// or a transport failure both mean the backend is down.
    pub async fn health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Posts one query to `POST /chat` and parses the answer body.
    pub async fn chat(&self, query: &str) -> CharlaResult<ChatResponse> {
        let url = format!("{}/chat", self.base_url);
        let payload = ChatRequest {
            query,
            category: CHAT_CATEGORY,
        };

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| CharlaError::api_error(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CharlaError::api_error(format!(
                "backend returned {}",
                status
            )));
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| CharlaError::api_error(format!("failed to parse response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn health_ok_means_reachable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        assert!(client.health().await);
    }

    #[tokio::test]
    async fn health_server_error_means_unreachable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        assert!(!client.health().await);
    }

    #[tokio::test]
    async fn health_transport_error_means_unreachable() {
        // Port 1 is never bound by a backend.
        let client = ApiClient::new("http://127.0.0.1:1");
        assert!(!client.health().await);
    }

    #[tokio::test]
    async fn chat_posts_query_and_parses_answer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "query": "¿Qué es Wompi?",
                "category": "knowledge_base"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "Wompi es una pasarela de pagos.",
                "sources": [
                    {"title": "intro.md", "source": "docs/intro.md", "score": 0.3}
                ],
                "totalSources": 1
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let answer = client.chat("¿Qué es Wompi?").await.unwrap();
        assert_eq!(answer.response, "Wompi es una pasarela de pagos.");
        assert_eq!(answer.sources.len(), 1);
        assert_eq!(answer.sources[0].title, "intro.md");
        assert_eq!(answer.total_sources, 1);
    }

    #[tokio::test]
    async fn chat_server_error_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let err = client.chat("hola").await.unwrap_err();
        assert!(matches!(err, CharlaError::Api(_)));
    }

    #[tokio::test]
    async fn chat_malformed_body_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        assert!(client.chat("hola").await.is_err());
    }

    #[tokio::test]
    async fn chat_without_sources_defaults_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "response": "ok" })),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let answer = client.chat("hola").await.unwrap();
        assert!(answer.sources.is_empty());
    }
}
