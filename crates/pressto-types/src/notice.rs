//! User-facing notification payloads.
//!
//! The core never renders notifications itself; it hands a [`Notice`] to
//! whatever sink the embedding portal provides (a toast system, a status
//! bar, a log).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoticeKind {
	Info,
	Success,
	Error,
}

impl fmt::Display for NoticeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NoticeKind::Info => write!(f, "info"),
			NoticeKind::Success => write!(f, "success"),
			NoticeKind::Error => write!(f, "error"),
		}
	}
}

/// A single user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
	pub kind: NoticeKind,
	pub message: String,
}

impl Notice {
	pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}
}
