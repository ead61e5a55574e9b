//! Order model types for the Pressto client core.
//!
//! This module defines the order record as the backend serves it, the status
//! enumeration that drives the lifecycle, and the structured pickup address.
//! The status enumeration is closed: an unrecognized status tag from the
//! backend is a decode error, never a silent default.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a status tag does not name a known lifecycle state.
///
/// Surfacing this instead of defaulting keeps data-shape drift from the
/// backend visible at the decode boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown order status: {0}")]
pub struct UnknownStatus(pub String);

/// Lifecycle position of an order.
///
/// Serialized with the backend's camelCase wire tags. The enumeration is the
/// single source of truth for lifecycle position; transition rules live in
/// the lifecycle crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
	/// Created by the customer, waiting for the shop to accept or decline.
	Pending,
	/// Accepted by the shop, pickup being arranged.
	Accepted,
	/// Items collected from the customer.
	PickedUp,
	/// Items being processed by the shop.
	InProgress,
	/// Processing finished, ready for delivery.
	Completed,
	/// Delivered back to the customer. Terminal.
	Delivered,
	/// Cancelled by either party. Terminal.
	Cancelled,
}

impl OrderStatus {
	/// All lifecycle states, in forward order with terminals last.
	pub const ALL: [OrderStatus; 7] = [
		OrderStatus::Pending,
		OrderStatus::Accepted,
		OrderStatus::PickedUp,
		OrderStatus::InProgress,
		OrderStatus::Completed,
		OrderStatus::Delivered,
		OrderStatus::Cancelled,
	];

	/// Returns the camelCase wire tag for this status.
	pub fn as_str(&self) -> &'static str {
		match self {
			OrderStatus::Pending => "pending",
			OrderStatus::Accepted => "accepted",
			OrderStatus::PickedUp => "pickedUp",
			OrderStatus::InProgress => "inProgress",
			OrderStatus::Completed => "completed",
			OrderStatus::Delivered => "delivered",
			OrderStatus::Cancelled => "cancelled",
		}
	}
}

impl fmt::Display for OrderStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for OrderStatus {
	type Err = UnknownStatus;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		OrderStatus::ALL
			.iter()
			.find(|status| status.as_str() == s)
			.copied()
			.ok_or_else(|| UnknownStatus(s.to_string()))
	}
}

/// A line item on an order.
///
/// The unit price is a snapshot taken when the order was created; later
/// edits to the shop's catalog never alter it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
	/// Kind of garment or service, e.g. "Shirts".
	pub item_type: String,
	/// Number of pieces. Zero is allowed on a stored order but a new order
	/// must carry at least one piece in total.
	pub count: u32,
	/// Price per piece at order-creation time.
	pub unit_price: Decimal,
}

impl OrderItem {
	/// Line total for this item.
	pub fn line_total(&self) -> Decimal {
		self.unit_price * Decimal::from(self.count)
	}
}

/// Structured pickup address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupAddress {
	pub street: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub landmark: Option<String>,
	pub city: String,
	pub state: String,
	pub pincode: String,
}

impl PickupAddress {
	/// Returns the names of every required field that is missing or blank.
	///
	/// An empty result means the address is valid. `landmark` is optional
	/// and never reported.
	pub fn missing_fields(&self) -> Vec<&'static str> {
		let mut missing = Vec::new();
		if self.street.trim().is_empty() {
			missing.push("street");
		}
		if self.city.trim().is_empty() {
			missing.push("city");
		}
		if self.state.trim().is_empty() {
			missing.push("state");
		}
		if self.pincode.trim().is_empty() {
			missing.push("pincode");
		}
		missing
	}
}

/// A single customer request for laundry/ironing services from one shop.
///
/// Created by a customer Schedule Pickup action with status `pending`;
/// mutated only through status transitions; never deleted, only terminally
/// archived in status (`delivered` or `cancelled`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
	/// Backend-assigned identifier. Immutable.
	pub id: String,
	/// Display name of the other party: the shop for a customer view, the
	/// customer for a shop view.
	pub counterpart_name: String,
	/// Line items with price snapshots.
	pub items: Vec<OrderItem>,
	/// Current lifecycle position.
	pub status: OrderStatus,
	/// Scheduled pickup date. Date-only; the scheduling model carries no
	/// time of day.
	pub pickup_date: NaiveDate,
	/// Order total captured at creation. Not recomputed from live pricing.
	pub total_amount: Decimal,
	pub pickup_address: PickupAddress,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub special_instructions: Option<String>,
	/// Creation timestamp. Immutable.
	pub created_at: DateTime<Utc>,
}

impl Order {
	/// Total number of pieces across all line items.
	pub fn total_item_count(&self) -> u32 {
		self.items.iter().map(|item| item.count).sum()
	}
}
