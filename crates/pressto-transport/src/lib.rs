//! Transport module for the Pressto client core.
//!
//! This module defines the generic request collaborator the domain core
//! consumes: four verbs returning structured JSON or a classified error.
//! The reqwest-backed implementation lives under `implementations`; tests
//! substitute their own. Timeouts belong here at the transport boundary,
//! never inside the domain core, and mutating requests are never retried
//! automatically.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod http;
}
pub mod session;

pub use implementations::http::HttpClient;
pub use session::{Session, SessionContext};

/// Classified transport failures.
///
/// The dispatcher is the only layer that turns these into user-visible
/// notices; everything below just propagates them.
#[derive(Debug, Error)]
pub enum TransportError {
	/// Transport-level failure with no usable response. Retryable by the
	/// user re-triggering the action; never retried automatically.
	#[error("Network error: {0}")]
	Network(String),
	/// 401-equivalent. Non-retryable; session teardown is handled by the
	/// session collaborator, not here.
	#[error("Authentication failed: {0}")]
	Auth(String),
	/// 5xx-equivalent, surfaced verbatim.
	#[error("Server error ({status}): {message}")]
	Server { status: u16, message: String },
	/// Any other non-2xx response.
	#[error("Request failed ({status}): {message}")]
	Api { status: u16, message: String },
	/// The response body did not match the expected shape. Unknown order
	/// status tags from the backend surface here instead of being silently
	/// defaulted.
	#[error("Decode error: {0}")]
	Decode(String),
}

/// Classifies a non-success HTTP status into the error taxonomy.
pub fn classify_status(status: u16, message: String) -> TransportError {
	match status {
		401 => TransportError::Auth(message),
		500..=599 => TransportError::Server { status, message },
		_ => TransportError::Api { status, message },
	}
}

/// Trait defining the generic request collaborator.
///
/// Paths are relative to the configured base URL. Bodies and responses are
/// structured JSON; typed decoding happens in the caller so the transport
/// stays shape-agnostic.
#[async_trait]
pub trait HttpInterface: Send + Sync {
	async fn get(&self, path: &str) -> Result<Value, TransportError>;

	async fn post(&self, path: &str, body: Value) -> Result<Value, TransportError>;

	async fn put(&self, path: &str, body: Value) -> Result<Value, TransportError>;

	async fn delete(&self, path: &str) -> Result<Value, TransportError>;
}
