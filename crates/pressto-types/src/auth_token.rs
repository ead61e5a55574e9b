//! Redacting wrapper for session bearer tokens.
//!
//! The token is zeroed on drop and never appears in `Debug` or `Display`
//! output, so it cannot leak through logging or error formatting.

use serde::{Deserialize, Deserializer};
use std::fmt;
use zeroize::Zeroizing;

/// A session bearer token.
///
/// Deliberately has no `Serialize` implementation; the token is read in at
/// login and only ever leaves through [`AuthToken::expose`] when the
/// transport builds the Authorization header.
#[derive(Clone)]
pub struct AuthToken(Zeroizing<String>);

impl AuthToken {
	pub fn new(token: impl Into<String>) -> Self {
		Self(Zeroizing::new(token.into()))
	}

	/// Exposes the raw token for building the Authorization header.
	///
	/// Callers must not log or persist the exposed value.
	pub fn expose(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Debug for AuthToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "AuthToken(***)")
	}
}

impl fmt::Display for AuthToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "***")
	}
}

impl From<String> for AuthToken {
	fn from(token: String) -> Self {
		Self::new(token)
	}
}

impl From<&str> for AuthToken {
	fn from(token: &str) -> Self {
		Self::new(token)
	}
}

impl<'de> Deserialize<'de> for AuthToken {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		String::deserialize(deserializer).map(AuthToken::new)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn debug_and_display_redact_the_token() {
		let token = AuthToken::new("eyJhbGciOiJIUzI1NiJ9.secret");
		assert_eq!(format!("{:?}", token), "AuthToken(***)");
		assert_eq!(format!("{}", token), "***");
		assert_eq!(token.expose(), "eyJhbGciOiJIUzI1NiJ9.secret");
	}
}
