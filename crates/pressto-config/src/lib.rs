//! Configuration module for the Pressto client core.
//!
//! Loads the client configuration from TOML, resolving `${VAR}` environment
//! references (with `${VAR:-default}` fallbacks) before parsing, and
//! validates the result so a misconfigured client fails at startup rather
//! than on the first request.

use pressto_types::Role;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the input dump
		ConfigError::Parse(err.message().to_string())
	}
}

/// Default request timeout applied at the transport boundary.
fn default_timeout_seconds() -> u64 {
	30
}

/// Settings for the order-management API the client talks to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
	/// Base URL every request path is joined onto, e.g.
	/// `http://localhost:5000/api`.
	pub base_url: String,
	/// Per-request timeout in seconds. Applied inside the HTTP client, not
	/// in the domain core.
	#[serde(default = "default_timeout_seconds")]
	pub timeout_seconds: u64,
}

/// Settings for the embedding portal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
	/// Which portal this process serves.
	pub role: Role,
}

/// Complete client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
	pub api: ApiConfig,
	pub client: ClientConfig,
}

impl Config {
	/// Loads and validates configuration from a TOML file.
	pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path)?;
		content.parse()
	}

	/// Validates invariants that TOML parsing alone cannot express.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.api.base_url.trim().is_empty() {
			return Err(ConfigError::Validation("api.base_url must be set".into()));
		}
		if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
			return Err(ConfigError::Validation(format!(
				"api.base_url must be an http(s) URL, got '{}'",
				self.api.base_url
			)));
		}
		if self.api.timeout_seconds == 0 {
			return Err(ConfigError::Validation(
				"api.timeout_seconds must be at least 1".into(),
			));
		}
		Ok(())
	}
}

impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let resolved = resolve_env_vars(s)?;
		let config: Config = toml::from_str(&resolved)?;
		config.validate()?;
		Ok(config)
	}
}

/// Resolves environment variable references in configuration text.
///
/// Replaces `${VAR_NAME}` with the value of the environment variable and
/// supports `${VAR_NAME:-default}` fallbacks. A reference without a value
/// and without a fallback is a validation error.
///
/// Input strings are limited to 1MB to prevent ReDoS attacks.
fn resolve_env_vars(input: &str) -> Result<String, ConfigError> {
	// Limit input size to prevent ReDoS attacks
	const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB
	if input.len() > MAX_INPUT_SIZE {
		return Err(ConfigError::Validation(format!(
			"Configuration file too large: {} bytes (max: {} bytes)",
			input.len(),
			MAX_INPUT_SIZE
		)));
	}

	let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]{0,127})(?::-([^}]{0,256}))?\}")
		.map_err(|e| ConfigError::Parse(format!("Regex error: {}", e)))?;

	let mut replacements = Vec::new();
	for cap in re.captures_iter(input) {
		let full_match = cap.get(0).unwrap();
		let var_name = cap.get(1).unwrap().as_str();
		let default_value = cap.get(2).map(|m| m.as_str());

		let value = match std::env::var(var_name) {
			Ok(v) => v,
			Err(_) => match default_value {
				Some(default) => default.to_string(),
				None => {
					return Err(ConfigError::Validation(format!(
						"Environment variable '{}' not found",
						var_name
					)))
				},
			},
		};
		replacements.push((full_match.start(), full_match.end(), value));
	}

	// Apply replacements in reverse order to keep earlier positions valid
	let mut result = input.to_string();
	for (start, end, value) in replacements.iter().rev() {
		result.replace_range(*start..*end, value);
	}
	Ok(result)
}
