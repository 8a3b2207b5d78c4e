//! HTTP client for the Vocode API.

use bytes::Bytes;
use reqwest::header::AUTHORIZATION;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiErrorBody;
use crate::error::Result;
use crate::error::VocodeError;
use crate::resources::AccountConnections;
use crate::resources::Actions;
use crate::resources::Agents;
use crate::resources::Calls;
use crate::resources::Numbers;
use crate::resources::Prompts;
use crate::resources::UsageResource;
use crate::resources::VectorDatabases;
use crate::resources::Voices;
use crate::resources::Webhooks;

/// Environment variable for API key.
const API_KEY_ENV: &str = "VOCODE_API_KEY";

/// The Vocode API client.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: reqwest::Client,
    auth_header: HeaderValue,
    config: ClientConfig,
}

impl Client {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(VocodeError::Configuration(
                "API key is required".to_string(),
            ));
        }

        let mut auth_header = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| VocodeError::Configuration(format!("Invalid API key: {e}")))?;
        auth_header.set_sensitive(true);

        let http_client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http_client,
            auth_header,
            config,
        })
    }

    /// Create a new client using the VOCODE_API_KEY environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            VocodeError::Configuration(format!("Missing {API_KEY_ENV} environment variable"))
        })?;

        Self::new(ClientConfig::new(api_key))
    }

    /// Create a new client with the given API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(api_key))
    }

    /// Get the account connections resource.
    pub fn account_connections(&self) -> AccountConnections<'_> {
        AccountConnections::new(self)
    }

    /// Get the actions resource.
    pub fn actions(&self) -> Actions<'_> {
        Actions::new(self)
    }

    /// Get the agents resource.
    pub fn agents(&self) -> Agents<'_> {
        Agents::new(self)
    }

    /// Get the calls resource.
    pub fn calls(&self) -> Calls<'_> {
        Calls::new(self)
    }

    /// Get the numbers resource.
    pub fn numbers(&self) -> Numbers<'_> {
        Numbers::new(self)
    }

    /// Get the prompts resource.
    pub fn prompts(&self) -> Prompts<'_> {
        Prompts::new(self)
    }

    /// Get the usage resource.
    pub fn usage(&self) -> UsageResource<'_> {
        UsageResource::new(self)
    }

    /// Get the vector databases resource.
    pub fn vector_databases(&self) -> VectorDatabases<'_> {
        VectorDatabases::new(self)
    }

    /// Get the voices resource.
    pub fn voices(&self) -> Voices<'_> {
        Voices::new(self)
    }

    /// Get the webhooks resource.
    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(self)
    }

    /// Build the default headers for API requests.
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers
    }

    /// Join the base URL, API version segment and resource path.
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}{path}",
            self.config.base_url, self.config.api_version
        )
    }

    /// Send a GET request and decode the JSON response.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "dispatching GET request");

        let response = self
            .http_client
            .get(&url)
            .headers(self.default_headers())
            .query(query)
            .send()
            .await?;

        decode_response(response).await
    }

    /// Send a POST request and decode the JSON response.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "dispatching POST request");

        let mut request = self
            .http_client
            .post(&url)
            .headers(self.default_headers())
            .query(query);
        if let Some(body) = &body {
            request = request.json(body);
        }
        let response = request.send().await?;

        decode_response(response).await
    }

    /// Send a GET request and return the raw response body.
    pub(crate) async fn get_bytes(&self, path: &str, query: &[(&str, String)]) -> Result<Bytes> {
        let url = self.url(path);
        debug!(url = %url, "dispatching GET request");

        let response = self
            .http_client
            .get(&url)
            .headers(self.default_headers())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_error_status(status.as_u16(), &body));
        }

        Ok(response.bytes().await?)
    }
}

/// Decode a JSON response body, mapping non-success statuses to errors.
async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        let body = response.text().await?;
        return Ok(serde_json::from_str(&body)?);
    }

    let body = response.text().await.unwrap_or_default();
    debug!(status = status.as_u16(), "request failed");
    Err(map_error_status(status.as_u16(), &body))
}

/// Map a non-success status code and its body to an error.
fn map_error_status(status: u16, body: &str) -> VocodeError {
    match status {
        400 | 403 => match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(error) => VocodeError::Api { status, error },
            Err(_) => VocodeError::UnexpectedStatus {
                status,
                body: body.to_string(),
            },
        },
        422 => VocodeError::UnprocessableEntity,
        429 => VocodeError::RateLimited,
        _ => VocodeError::UnexpectedStatus {
            status,
            body: body.to_string(),
        },
    }
}


// ============================================================================
// Integration tests with wiremock
// ============================================================================

#[cfg(test)]
mod integration_tests {
    use pretty_assertions::assert_eq;
    use wiremock::Mock;
    use wiremock::MockServer;
    use wiremock::ResponseTemplate;
    use wiremock::matchers::body_json;
    use wiremock::matchers::header;
    use wiremock::matchers::method;
    use wiremock::matchers::path;
    use wiremock::matchers::query_param;

    use crate::Client;
    use crate::config::ClientConfig;
    use crate::error::VocodeError;
    use crate::pagination::PageParams;
    use crate::types::AzureVoice;
    use crate::types::BuyNumberParams;
    use crate::types::CallParams;
    use crate::types::TelephonyProvider;
    use crate::types::VoiceConfig;

    fn make_client(base_url: &str) -> Client {
        let config = ClientConfig::new("test-api-key").base_url(base_url);
        Client::new(config).expect("client creation should succeed")
    }

    #[tokio::test]
    async fn test_get_voice_sends_bearer_and_id() {
        let mock_server = MockServer::start().await;

        let response_json = serde_json::json!({
            "id": "v1",
            "user_id": "u1",
            "type": "voice_azure",
            "voice_name": "Eva",
            "pitch": 3,
            "rate": 10
        });

        Mock::given(method("GET"))
            .and(path("/v1/voices"))
            .and(query_param("id", "v1"))
            .and(header("authorization", "Bearer test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_json))
            .mount(&mock_server)
            .await;

        let client = make_client(&mock_server.uri());
        let voice = client.voices().get("v1").await.unwrap();

        assert_eq!(voice.id, "v1");
        assert_eq!(
            voice.config,
            VoiceConfig::Azure(AzureVoice {
                voice_name: "Eva".to_string(),
                pitch: 3,
                rate: 10,
            })
        );
    }

    #[tokio::test]
    async fn test_list_voices_sends_paging_params() {
        let mock_server = MockServer::start().await;

        let response_json = serde_json::json!({
            "items": [],
            "page": 2,
            "size": 10,
            "total": 12,
            "has_more": false,
            "total_is_estimated": false
        });

        Mock::given(method("GET"))
            .and(path("/v1/voices/list"))
            .and(query_param("page", "2"))
            .and(query_param("size", "10"))
            .and(query_param("sort_column", "created_at"))
            .and(query_param("sort_desc", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_json))
            .mount(&mock_server)
            .await;

        let client = make_client(&mock_server.uri());
        let paging = PageParams::new().page(2).size(10).sort("created_at", true);
        let page = client.voices().list(Some(paging)).await.unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(page.total, 12);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_create_voice_sends_tagged_body() {
        let mock_server = MockServer::start().await;

        let request_json = serde_json::json!({
            "type": "voice_azure",
            "voice_name": "Eva",
            "pitch": 3,
            "rate": 10
        });
        let response_json = serde_json::json!({
            "id": "v1",
            "user_id": "u1",
            "type": "voice_azure",
            "voice_name": "Eva",
            "pitch": 3,
            "rate": 10
        });

        Mock::given(method("POST"))
            .and(path("/v1/voices/create"))
            .and(body_json(&request_json))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_json))
            .mount(&mock_server)
            .await;

        let client = make_client(&mock_server.uri());
        let voice = client
            .voices()
            .create(VoiceConfig::Azure(AzureVoice {
                voice_name: "Eva".to_string(),
                pitch: 3,
                rate: 10,
            }))
            .await
            .unwrap();

        assert_eq!(voice.id, "v1");
    }

    #[tokio::test]
    async fn test_buy_and_cancel_number() {
        let mock_server = MockServer::start().await;

        let number_json = serde_json::json!({
            "id": "n1",
            "user_id": "u1",
            "active": true,
            "label": "",
            "outbound_only": false,
            "number": "+14155550100",
            "telephony_provider": "twilio",
            "telephony_account_connection": "c1"
        });

        Mock::given(method("POST"))
            .and(path("/v1/numbers/buy"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&number_json))
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/numbers/cancel"))
            .and(query_param("phone_number", "+14155550100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&number_json))
            .mount(&mock_server)
            .await;

        let client = make_client(&mock_server.uri());
        let bought = client
            .numbers()
            .buy(BuyNumberParams {
                area_code: "415".to_string(),
                telephony_provider: TelephonyProvider::Twilio,
                telephony_account_connection: "c1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(bought.number, "+14155550100");

        let cancelled = client.numbers().cancel("+14155550100").await.unwrap();
        assert_eq!(cancelled.id, "n1");
    }

    #[tokio::test]
    async fn test_end_call_and_download_recording() {
        let mock_server = MockServer::start().await;

        let call_json = serde_json::json!({
            "id": "call1",
            "user_id": "u1",
            "status": "ended",
            "from_number": "+15550100",
            "to_number": "+15550111"
        });

        Mock::given(method("POST"))
            .and(path("/v1/calls/end"))
            .and(query_param("id", "call1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&call_json))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/calls/recording"))
            .and(query_param("id", "call1"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x52, 0x49, 0x46, 0x46]))
            .mount(&mock_server)
            .await;

        let client = make_client(&mock_server.uri());
        let call = client.calls().end("call1").await.unwrap();
        assert_eq!(call.id, "call1");

        let recording = client.calls().recording("call1").await.unwrap();
        assert_eq!(recording.as_ref(), &[0x52, 0x49, 0x46, 0x46]);
    }

    #[tokio::test]
    async fn test_create_call() {
        let mock_server = MockServer::start().await;

        let call_json = serde_json::json!({
            "id": "call1",
            "user_id": "u1",
            "status": "not_started",
            "from_number": "+15550100",
            "to_number": "+15550111"
        });

        Mock::given(method("POST"))
            .and(path("/v1/calls/create"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&call_json))
            .mount(&mock_server)
            .await;

        let client = make_client(&mock_server.uri());
        let call = client
            .calls()
            .create(CallParams::new("+15550100", "+15550111", "ag1"))
            .await
            .unwrap();
        assert_eq!(call.id, "call1");
    }

    #[tokio::test]
    async fn test_forbidden_maps_to_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/voices"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(serde_json::json!({"detail": "Invalid API key"})),
            )
            .mount(&mock_server)
            .await;

        let client = make_client(&mock_server.uri());
        let result = client.voices().get("v1").await;

        assert!(matches!(result, Err(VocodeError::Api { status: 403, .. })));
    }

    #[tokio::test]
    async fn test_bad_request_maps_to_api_error() {
        let mock_server = MockServer::start().await;

        let error_json = serde_json::json!({
            "detail": [
                {"loc": ["body", "type"], "msg": "field required", "type": "value_error.missing"}
            ]
        });

        Mock::given(method("POST"))
            .and(path("/v1/voices/create"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&error_json))
            .mount(&mock_server)
            .await;

        let client = make_client(&mock_server.uri());
        let result = client
            .voices()
            .create(VoiceConfig::Azure(AzureVoice::default()))
            .await;

        assert!(matches!(result, Err(VocodeError::Api { status: 400, .. })));
    }

    #[tokio::test]
    async fn test_rate_limit_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/usage"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let client = make_client(&mock_server.uri());
        let result = client.usage().get().await;

        assert!(matches!(result, Err(VocodeError::RateLimited)));
    }

    #[tokio::test]
    async fn test_unprocessable_entity_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/numbers"))
            .respond_with(ResponseTemplate::new(422))
            .mount(&mock_server)
            .await;

        let client = make_client(&mock_server.uri());
        let result = client.numbers().get("+15550100").await;

        assert!(matches!(result, Err(VocodeError::UnprocessableEntity)));
    }

    #[tokio::test]
    async fn test_unexpected_status_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/webhooks"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let client = make_client(&mock_server.uri());
        let result = client.webhooks().get("w1").await;

        let Err(VocodeError::UnexpectedStatus { status, body }) = result else {
            panic!("expected an unexpected-status error");
        };
        assert_eq!(status, 500);
        assert_eq!(body, "boom");
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_a_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/usage"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = make_client(&mock_server.uri());
        let result = client.usage().get().await;

        assert!(matches!(result, Err(VocodeError::Decode(_))));
    }
}
