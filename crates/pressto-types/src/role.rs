//! The capability tag selecting which portal a flow serves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the marketplace the current session acts as.
///
/// The two portals consume the same core; the role only selects endpoints
/// and the counterpart naming, never separate lifecycle logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
	Customer,
	Shop,
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Role::Customer => write!(f, "customer"),
			Role::Shop => write!(f, "shop"),
		}
	}
}
