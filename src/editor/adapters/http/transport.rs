//! `reqwest` transport for the task service.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;

use crate::{
    config::TaskServiceConfig,
    editor::ports::{MutationMethod, MutationTransport, TransportError, TransportResult},
};

/// Sends mutation requests to the task service endpoint over HTTP.
///
/// The response status is not interpreted; the JSON body carries the
/// acceptance flag.
#[derive(Debug, Clone)]
pub struct HttpTaskTransport {
    client: Client,
    endpoint: String,
}

impl HttpTaskTransport {
    /// Creates a transport with a default HTTP client.
    #[must_use]
    pub fn new(config: &TaskServiceConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Creates a transport reusing an existing HTTP client.
    #[must_use]
    pub fn with_client(client: Client, config: &TaskServiceConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint(),
        }
    }

    /// Returns the endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn http_method(method: MutationMethod) -> Method {
    match method {
        MutationMethod::Post => Method::POST,
        MutationMethod::Patch => Method::PATCH,
        MutationMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl MutationTransport for HttpTaskTransport {
    async fn send(&self, method: MutationMethod, body: Value) -> TransportResult<Value> {
        let response = self
            .client
            .request(http_method(method), &self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(TransportError::request)?;

        debug!(
            method = %method,
            status = %response.status(),
            "task service responded"
        );
        response.json::<Value>().await.map_err(TransportError::decode)
    }
}
