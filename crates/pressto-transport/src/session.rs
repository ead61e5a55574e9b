//! Explicit session context injected into the transport.
//!
//! The original portals read the token from ambient browser storage deep
//! inside request code. Here the session is an explicitly passed object
//! with an init (login) and teardown (logout) lifecycle; business logic
//! never reaches into ambient state.

use pressto_types::{AuthToken, Role};
use tokio::sync::RwLock;

/// An authenticated session.
#[derive(Debug, Clone)]
pub struct Session {
	pub token: AuthToken,
	pub role: Role,
}

/// Shared session slot, injected into the HTTP client.
///
/// Wrapped in an `Arc` by the embedding portal so the transport and the
/// login/logout surface observe the same session.
#[derive(Debug, Default)]
pub struct SessionContext {
	inner: RwLock<Option<Session>>,
}

impl SessionContext {
	pub fn new() -> Self {
		Self::default()
	}

	/// Installs a session. Init half of the lifecycle, called on login.
	pub async fn authenticate(&self, session: Session) {
		*self.inner.write().await = Some(session);
	}

	/// Drops the session. Teardown half, called on logout or when the
	/// session collaborator reacts to an auth failure.
	pub async fn clear(&self) {
		*self.inner.write().await = None;
	}

	pub async fn is_authenticated(&self) -> bool {
		self.inner.read().await.is_some()
	}

	pub async fn role(&self) -> Option<Role> {
		self.inner.read().await.as_ref().map(|s| s.role)
	}

	/// Raw bearer token for the Authorization header, if a session exists.
	pub(crate) async fn bearer_token(&self) -> Option<String> {
		self.inner
			.read()
			.await
			.as_ref()
			.map(|s| s.token.expose().to_string())
	}
}
