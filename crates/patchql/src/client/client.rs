use crate::client::ExecuteError;
use crate::client::Payload;
use crate::client::ResponseEnvelope;
use crate::client::TransportError;
use crate::Variables;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

type Result<T> = std::result::Result<T, ExecuteError>;

pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Posts GraphQL requests to a single HTTP endpoint.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    content_type: String,
    endpoint: String,
    headers: HeaderMap,
    http_client: reqwest::Client,
}
impl Client {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            endpoint: endpoint.into(),
            headers: HeaderMap::new(),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn content_type(&self) -> &str {
        self.content_type.as_str()
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Execute `query` without variables and decode its `data` into `T`.
    pub async fn execute<T: DeserializeOwned>(&self, query: &str) -> Result<T> {
        self.send(&Payload {
            query,
            variables: None,
        }).await
    }

    /// Execute `query` with `variables` and decode its `data` into `T`.
    pub async fn execute_with_variables<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: &Variables,
    ) -> Result<T> {
        self.send(&Payload {
            query,
            variables: Some(variables),
        }).await
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Send an extra header with every request. Setting the same header
    /// twice replaces the earlier value.
    pub fn with_header(
        mut self,
        name: &str,
        value: &str,
    ) -> std::result::Result<Self, TransportError> {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|source| TransportError::InvalidHeaderName {
                name: name.to_string(),
                source,
            })?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|source| TransportError::InvalidHeaderValue {
                name: name.to_string(),
                source,
            })?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = http_client;
        self
    }

    async fn send<T: DeserializeOwned>(&self, payload: &Payload<'_>) -> Result<T> {
        let body = serde_json::to_vec(payload)
            .map_err(TransportError::EncodePayload)?;

        log::debug!(
            "Posting GraphQL request ({} bytes) to {}.",
            body.len(),
            self.endpoint,
        );
        let response = self.http_client
            .post(self.endpoint.as_str())
            .header(CONTENT_TYPE, self.content_type.as_str())
            .headers(self.headers.clone())
            .body(body)
            .send()
            .await
            .map_err(|source| TransportError::Send {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        // The body is decoded whatever the HTTP status is.
        let status = response.status();
        log::debug!("GraphQL endpoint {} responded with HTTP {status}.", self.endpoint);
        let bytes = response.bytes()
            .await
            .map_err(|source| TransportError::ReadBody { status, source })?;

        let envelope: ResponseEnvelope = serde_json::from_slice(&bytes)
            .map_err(|source| TransportError::DecodeEnvelope { status, source })?;

        if let Some(errors) = envelope.errors
            && !errors.is_empty() {
            log::debug!("GraphQL endpoint returned {} errors.", errors.len());
            return Err(ExecuteError::GraphQL(errors));
        }

        let data = envelope.data.unwrap_or(serde_json::Value::Null);
        serde_json::from_value(data)
            .map_err(|source| TransportError::DecodeData { status, source }.into())
    }
}
