//! Core dispatch layer for the Pressto client.
//!
//! This module wires the pure lifecycle rules to the transport and the
//! order store: it validates requested status changes locally before any
//! network traffic, issues the mutation, refetches strictly after the
//! acknowledgment, and is the single place where failures become
//! user-visible notices. Both portals drive the same [`flow::OrderFlow`],
//! differing only in their [`pressto_types::Role`].

use pressto_lifecycle::InvalidTransition;
use pressto_transport::TransportError;
use thiserror::Error;

pub mod catalog;
pub mod flow;
pub mod notify;

#[cfg(test)]
mod test_support;

pub use catalog::ShopCatalog;
pub use flow::OrderFlow;
pub use notify::{NotificationSink, TracingSink};

/// Errors surfaced by the dispatch layer.
#[derive(Debug, Error)]
pub enum DispatchError {
	/// The requested status change is not in the legal-transition table.
	/// Caught locally; no request was issued.
	#[error(transparent)]
	InvalidTransition(#[from] InvalidTransition),
	/// Required fields were missing or malformed. Caught locally before
	/// dispatch.
	#[error("Validation failed: {0}")]
	Validation(String),
	/// A classified failure from the transport collaborator.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The order id is not present in the current store snapshot.
	#[error("Unknown order: {0}")]
	UnknownOrder(String),
	/// A mutation for this order is already in flight; duplicate
	/// submissions are rejected until it settles.
	#[error("Order {0} already has a pending request")]
	Busy(String),
}
