//! Notification sink: how the core reaches the user.
//!
//! The embedding portal supplies the sink (a toast system in the browser
//! builds). [`TracingSink`] is the default for headless use and tests that
//! only care that a notice was emitted somewhere.

use pressto_types::NoticeKind;
use tracing::{info, warn};

/// Generic notification sink consumed by the dispatch layer.
pub trait NotificationSink: Send + Sync {
	fn notify(&self, kind: NoticeKind, message: &str);
}

/// Sink that writes notices to the structured log.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
	fn notify(&self, kind: NoticeKind, message: &str) {
		match kind {
			NoticeKind::Error => warn!(kind = %kind, message, "notice"),
			_ => info!(kind = %kind, message, "notice"),
		}
	}
}
