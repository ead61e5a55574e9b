//! reqwest-backed implementation of the request collaborator.
//!
//! Joins relative paths onto the configured base URL, attaches the bearer
//! token from the injected session, applies the configured timeout, and
//! classifies every non-2xx response into the transport error taxonomy.

use crate::session::SessionContext;
use crate::{classify_status, HttpInterface, TransportError};
use async_trait::async_trait;
use pressto_config::ApiConfig;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// HTTP client for the order-management backend.
pub struct HttpClient {
	client: reqwest::Client,
	base_url: String,
	session: Arc<SessionContext>,
}

impl HttpClient {
	/// Builds a client from the API configuration and a shared session.
	pub fn new(config: &ApiConfig, session: Arc<SessionContext>) -> Result<Self, TransportError> {
		let client = reqwest::Client::builder()
			.timeout(Duration::from_secs(config.timeout_seconds))
			.build()
			.map_err(|e| TransportError::Network(format!("Failed to build client: {}", e)))?;
		Ok(Self {
			client,
			base_url: config.base_url.trim_end_matches('/').to_string(),
			session,
		})
	}

	fn url_for(&self, path: &str) -> String {
		format!("{}/{}", self.base_url, path.trim_start_matches('/'))
	}

	async fn request(
		&self,
		method: Method,
		path: &str,
		body: Option<Value>,
	) -> Result<Value, TransportError> {
		let url = self.url_for(path);
		debug!(%method, %url, "issuing request");

		let mut request = self.client.request(method, &url);
		if let Some(token) = self.session.bearer_token().await {
			request = request.bearer_auth(token);
		}
		if let Some(body) = body {
			request = request.json(&body);
		}

		let response = request
			.send()
			.await
			.map_err(|e| TransportError::Network(e.to_string()))?;

		let status = response.status();
		let text = response
			.text()
			.await
			.map_err(|e| TransportError::Network(e.to_string()))?;

		if !status.is_success() {
			let message = extract_error_message(&text);
			debug!(status = status.as_u16(), %url, "request failed");
			return Err(classify_status(status.as_u16(), message));
		}

		if text.trim().is_empty() {
			// Bare-ack endpoints (e.g. DELETE) may return no body.
			return Ok(Value::Null);
		}
		serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))
	}
}

/// Pulls the backend's error message out of a failure body.
///
/// The backend reports failures as `{"error": "..."}`; anything else is
/// passed through as-is so the user still sees something actionable.
fn extract_error_message(body: &str) -> String {
	if let Ok(value) = serde_json::from_str::<Value>(body) {
		if let Some(message) = value.get("error").and_then(Value::as_str) {
			return message.to_string();
		}
		if let Some(message) = value.get("message").and_then(Value::as_str) {
			return message.to_string();
		}
	}
	if body.trim().is_empty() {
		"An error occurred".to_string()
	} else {
		body.trim().to_string()
	}
}

#[async_trait]
impl HttpInterface for HttpClient {
	async fn get(&self, path: &str) -> Result<Value, TransportError> {
		self.request(Method::GET, path, None).await
	}

	async fn post(&self, path: &str, body: Value) -> Result<Value, TransportError> {
		self.request(Method::POST, path, Some(body)).await
	}

	async fn put(&self, path: &str, body: Value) -> Result<Value, TransportError> {
		self.request(Method::PUT, path, Some(body)).await
	}

	async fn delete(&self, path: &str) -> Result<Value, TransportError> {
		self.request(Method::DELETE, path, None).await
	}
}
