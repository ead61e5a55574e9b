//! Status machine: the legal-transition table and per-status metadata.
//!
//! The table here is a UX guard, not a security boundary. The backend
//! validates every transition again; this check only stops obviously
//! invalid actions before they cost a network round trip.

use pressto_types::{Order, OrderStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a requested status change is not in the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid transition: {from} -> {to}")]
pub struct InvalidTransition {
	pub from: OrderStatus,
	pub to: OrderStatus,
}

/// The party that drives a transition or owns a lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Actor {
	Customer,
	Shop,
}

/// Presentation category for a status. Total and stable; the mapping never
/// changes for a given status, but the rendering of each category is up to
/// the embedding portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorCategory {
	Yellow,
	Blue,
	Purple,
	Indigo,
	Green,
	Teal,
	Red,
}

/// Display and ownership metadata for one lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInfo {
	/// Wire tag, identical to the serialized form.
	pub tag: &'static str,
	/// Human status sentence shown next to the badge.
	pub description: &'static str,
	pub color: ColorCategory,
	/// Which party drives the order forward from this status. `None` for
	/// terminal states.
	pub driven_by: Option<Actor>,
}

/// Returns the set of statuses an order may legally move to next.
///
/// Total over the enumeration; terminal states return an empty slice.
pub fn legal_next_statuses(status: OrderStatus) -> &'static [OrderStatus] {
	match status {
		OrderStatus::Pending => &[OrderStatus::Accepted, OrderStatus::Cancelled],
		OrderStatus::Accepted => &[OrderStatus::PickedUp, OrderStatus::Cancelled],
		OrderStatus::PickedUp => &[OrderStatus::InProgress, OrderStatus::Cancelled],
		OrderStatus::InProgress => &[OrderStatus::Completed, OrderStatus::Cancelled],
		OrderStatus::Completed => &[OrderStatus::Delivered],
		OrderStatus::Delivered => &[],
		OrderStatus::Cancelled => &[],
	}
}

/// Whether the status is an absorbing terminal state.
pub fn is_terminal(status: OrderStatus) -> bool {
	legal_next_statuses(status).is_empty()
}

/// Local legality gate for a requested status change.
///
/// Pure and side-effect free; the dispatcher calls this before issuing the
/// mutating request and fails fast without any network traffic when the
/// transition is not in the table.
pub fn check_transition(from: OrderStatus, to: OrderStatus) -> Result<(), InvalidTransition> {
	if legal_next_statuses(from).contains(&to) {
		Ok(())
	} else {
		Err(InvalidTransition { from, to })
	}
}

/// Returns a copy of the order with the requested transition applied.
///
/// Purely local: this never mutates remote state. It exists so callers can
/// preview the post-transition order; the dispatcher still refetches after
/// the backend acknowledges the real mutation.
pub fn apply_transition(order: &Order, to: OrderStatus) -> Result<Order, InvalidTransition> {
	check_transition(order.status, to)?;
	let mut updated = order.clone();
	updated.status = to;
	Ok(updated)
}

/// Returns display and ownership metadata for a status. Total.
pub fn status_info(status: OrderStatus) -> StatusInfo {
	match status {
		OrderStatus::Pending => StatusInfo {
			tag: "pending",
			description: "Waiting for shop confirmation",
			color: ColorCategory::Yellow,
			driven_by: Some(Actor::Shop),
		},
		OrderStatus::Accepted => StatusInfo {
			tag: "accepted",
			description: "Order accepted, arranging pickup",
			color: ColorCategory::Blue,
			driven_by: Some(Actor::Shop),
		},
		OrderStatus::PickedUp => StatusInfo {
			tag: "pickedUp",
			description: "Items picked up",
			color: ColorCategory::Purple,
			driven_by: Some(Actor::Shop),
		},
		OrderStatus::InProgress => StatusInfo {
			tag: "inProgress",
			description: "Your clothes are being ironed",
			color: ColorCategory::Indigo,
			driven_by: Some(Actor::Shop),
		},
		OrderStatus::Completed => StatusInfo {
			tag: "completed",
			description: "Ready for delivery",
			color: ColorCategory::Green,
			driven_by: Some(Actor::Shop),
		},
		OrderStatus::Delivered => StatusInfo {
			tag: "delivered",
			description: "Order delivered",
			color: ColorCategory::Teal,
			driven_by: None,
		},
		OrderStatus::Cancelled => StatusInfo {
			tag: "cancelled",
			description: "Order cancelled",
			color: ColorCategory::Red,
			driven_by: None,
		},
	}
}
