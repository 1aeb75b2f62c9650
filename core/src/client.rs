//! The request core every endpoint funnels through.
//!
//! # Design
//! `ApiClient` holds an immutable `ClientConfig` and a transport, and carries
//! no mutable state between calls. `build_request` is the pure half of a
//! call: it assembles the URL, headers and body into an `HttpRequest`.
//! `call_api` hands that request to the transport for exactly one round trip.
//! `decode` turns the resulting envelope into a domain value or a typed error.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::encode::encode_component;
use crate::error::ApiError;
use crate::http::{ApiResponse, HttpMethod, HttpRequest, HttpTransport};
use crate::transport::UreqTransport;
use crate::word_api::WordApi;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "api_key";

/// Query string parameters. Ordered so built URLs are deterministic.
pub type QueryParams = BTreeMap<String, String>;

/// Extra request headers.
pub type HeaderParams = BTreeMap<String, String>;

/// Client for the word API, generic over the transport that executes requests.
#[derive(Debug, Clone)]
pub struct ApiClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl ApiClient<UreqTransport> {
    /// Create a client that talks to `base_url` with the blocking ureq transport.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self, ApiError> {
        Self::from_config(ClientConfig::new(api_key, base_url))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, ApiError> {
        let transport = UreqTransport::new(config.timeout);
        Self::with_transport(config, transport)
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Lookups under `/word.json/{word}`.
    pub fn word_api(&self) -> WordApi<'_, T> {
        WordApi::new(self)
    }

    /// Build the request for `resource_path` without performing any I/O.
    ///
    /// Query parameters are percent-encoded and appended with `?`, or with
    /// `&` when `resource_path` already carries a query string. `body` is
    /// ignored for GET; for any other method it is serialized to JSON, and an
    /// absent body is sent as `{}`.
    pub fn build_request(
        &self,
        resource_path: &str,
        method: HttpMethod,
        query: &QueryParams,
        body: Option<&serde_json::Value>,
        headers: &HeaderParams,
    ) -> Result<HttpRequest, ApiError> {
        if resource_path.trim().is_empty() {
            return Err(ApiError::InvalidArgument(
                "resource path cannot be empty".to_string(),
            ));
        }

        let mut url = format!("{}{}", self.config.base_url, resource_path);
        if !query.is_empty() {
            url.push(if resource_path.contains('?') { '&' } else { '?' });
            url.push_str(&encode_query(query));
        }

        let mut request_headers = vec![(API_KEY_HEADER.to_string(), self.config.api_key.clone())];

        let body = match method {
            HttpMethod::Get => None,
            _ => {
                let body = match body {
                    Some(value) => serde_json::to_string(value),
                    None => serde_json::to_string(&serde_json::Map::new()),
                }
                .map_err(ApiError::Serialization)?;
                if !headers.keys().any(|key| key.eq_ignore_ascii_case("content-type")) {
                    request_headers.push(("content-type".to_string(), "application/json".to_string()));
                }
                Some(body)
            }
        };

        request_headers.extend(headers.iter().map(|(key, value)| (key.clone(), value.clone())));

        Ok(HttpRequest {
            method,
            url,
            headers: request_headers,
            body,
        })
    }

    /// Build and execute one request, returning the raw envelope.
    ///
    /// Non-2xx statuses are returned as `Ok`; see `decode`.
    pub fn call_api(
        &self,
        resource_path: &str,
        method: HttpMethod,
        query: &QueryParams,
        body: Option<&serde_json::Value>,
        headers: &HeaderParams,
    ) -> Result<ApiResponse, ApiError> {
        let request = self.build_request(resource_path, method, query, body, headers)?;
        tracing::debug!(method = %request.method, url = %request.url, "calling api");

        let response = self.transport.execute(&request).map_err(|err| {
            tracing::warn!(method = %request.method, url = %request.url, error = %err, "transport failed");
            ApiError::from(err)
        })?;

        tracing::debug!(status = response.status, bytes = response.body.len(), "api responded");
        tracing::trace!(body = %response.body, "response body");
        Ok(response)
    }
}

/// Decode a response body into `D`, mapping non-2xx statuses to `Remote`.
///
/// An error-status body is never decoded as `D`: every field of the domain
/// records defaults, so it would come back as an empty record instead of an
/// error. The service's message is kept in `ApiError::Remote` instead.
pub fn decode<D: DeserializeOwned>(response: &ApiResponse) -> Result<D, ApiError> {
    check_status(response)?;
    serde_json::from_str(&response.body).map_err(|source| ApiError::Decode {
        source,
        body: response.body.clone(),
    })
}

fn encode_query(query: &QueryParams) -> String {
    query
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// The service's error payload, e.g. `{"type":"error","message":"..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn check_status(response: &ApiResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|error| error.message);
    tracing::warn!(status = response.status, message = ?message, "api returned an error status");
    Err(ApiError::Remote {
        status: response.status,
        message,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::TransportError;

    #[derive(Debug, Default)]
    struct Recorder {
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl HttpTransport for Recorder {
        fn execute(&self, request: &HttpRequest) -> Result<ApiResponse, TransportError> {
            self.requests.borrow_mut().push(request.clone());
            Ok(ApiResponse {
                status: 200,
                headers: Vec::new(),
                body: r#"{"word":"dog"}"#.to_string(),
            })
        }
    }

    fn client() -> ApiClient<Recorder> {
        ApiClient::with_transport(
            ClientConfig::new("test-key", "http://localhost:3000"),
            Recorder::default(),
        )
        .unwrap()
    }

    fn query(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn build_without_query_params() {
        let req = client()
            .build_request("/word.json/dog", HttpMethod::Get, &QueryParams::new(), None, &HeaderParams::new())
            .unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/word.json/dog");
        assert!(req.body.is_none());
    }

    #[test]
    fn first_query_param_uses_question_mark() {
        let req = client()
            .build_request(
                "/word.json/dog/definitions",
                HttpMethod::Get,
                &query(&[("limit", "5"), ("useCanonical", "true")]),
                None,
                &HeaderParams::new(),
            )
            .unwrap();
        assert_eq!(
            req.url,
            "http://localhost:3000/word.json/dog/definitions?limit=5&useCanonical=true"
        );
    }

    #[test]
    fn existing_query_string_is_extended_with_ampersand() {
        let req = client()
            .build_request(
                "/word.json/dog/examples?skip=1",
                HttpMethod::Get,
                &query(&[("limit", "2")]),
                None,
                &HeaderParams::new(),
            )
            .unwrap();
        assert_eq!(req.url, "http://localhost:3000/word.json/dog/examples?skip=1&limit=2");
    }

    #[test]
    fn query_keys_and_values_are_percent_encoded() {
        let req = client()
            .build_request(
                "/word.json/dog/definitions",
                HttpMethod::Get,
                &query(&[("partOfSpeech", "noun,verb"), ("a b", "c&d")]),
                None,
                &HeaderParams::new(),
            )
            .unwrap();
        assert_eq!(
            req.url,
            "http://localhost:3000/word.json/dog/definitions?a%20b=c%26d&partOfSpeech=noun%2Cverb"
        );
    }

    #[test]
    fn api_key_header_comes_first_then_caller_headers() {
        let mut headers = HeaderParams::new();
        headers.insert("accept".to_string(), "application/json".to_string());
        let req = client()
            .build_request("/word.json/dog", HttpMethod::Get, &QueryParams::new(), None, &headers)
            .unwrap();
        assert_eq!(
            req.headers,
            vec![
                ("api_key".to_string(), "test-key".to_string()),
                ("accept".to_string(), "application/json".to_string()),
            ]
        );
    }

    #[test]
    fn get_never_sends_a_body() {
        let body = serde_json::json!({"ignored": true});
        let req = client()
            .build_request("/word.json/dog", HttpMethod::Get, &QueryParams::new(), Some(&body), &HeaderParams::new())
            .unwrap();
        assert!(req.body.is_none());
        assert!(req.header("content-type").is_none());
    }

    #[test]
    fn post_serializes_body_as_json() {
        let body = serde_json::json!({"word": "dog", "count": 2});
        let req = client()
            .build_request("/wordList.json/x/words", HttpMethod::Post, &QueryParams::new(), Some(&body), &HeaderParams::new())
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.header("content-type"), Some("application/json"));
        let sent: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, body);
    }

    #[test]
    fn non_get_without_body_sends_empty_object() {
        let req = client()
            .build_request("/word.json/dog", HttpMethod::Delete, &QueryParams::new(), None, &HeaderParams::new())
            .unwrap();
        assert_eq!(req.body.as_deref(), Some("{}"));
    }

    #[test]
    fn blank_resource_path_is_rejected_before_io() {
        let client = client();
        for path in ["", "   "] {
            let err = client
                .call_api(path, HttpMethod::Get, &QueryParams::new(), None, &HeaderParams::new())
                .unwrap_err();
            assert!(matches!(err, ApiError::InvalidArgument(_)));
        }
        assert!(client.transport.requests.borrow().is_empty());
    }

    #[test]
    fn call_api_executes_exactly_once() {
        let client = client();
        let response = client
            .call_api("/word.json/dog", HttpMethod::Get, &QueryParams::new(), None, &HeaderParams::new())
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"word":"dog"}"#);
        assert_eq!(client.transport.requests.borrow().len(), 1);
    }

    #[test]
    fn with_transport_validates_config() {
        let err = ApiClient::with_transport(ClientConfig::new("", "http://localhost"), Recorder::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[test]
    fn decode_success() {
        let response = ApiResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"word":"dog"}"#.to_string(),
        };
        let value: serde_json::Value = decode(&response).unwrap();
        assert_eq!(value["word"], "dog");
    }

    #[test]
    fn decode_not_found_keeps_message() {
        let response = ApiResponse {
            status: 404,
            headers: Vec::new(),
            body: r#"{"type":"error","message":"word not found"}"#.to_string(),
        };
        let err = decode::<serde_json::Value>(&response).unwrap_err();
        assert!(err.is_not_found());
        match err {
            ApiError::Remote { message, body, .. } => {
                assert_eq!(message.as_deref(), Some("word not found"));
                assert!(body.contains("word not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_error_status_with_plain_body() {
        let response = ApiResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = decode::<serde_json::Value>(&response).unwrap_err();
        assert!(matches!(err, ApiError::Remote { status: 500, message: None, .. }));
    }

    #[test]
    fn decode_error_status_never_yields_a_default_record() {
        let response = ApiResponse {
            status: 404,
            headers: Vec::new(),
            body: r#"{"type":"error","message":"word not found"}"#.to_string(),
        };
        // The body alone would decode into an all-default record.
        assert!(serde_json::from_str::<crate::types::WordObject>(&response.body).is_ok());
        let err = decode::<crate::types::WordObject>(&response).unwrap_err();
        assert!(matches!(err, ApiError::Remote { status: 404, .. }));
    }

    #[test]
    fn decode_bad_json() {
        let response = ApiResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = decode::<serde_json::Value>(&response).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }
}
