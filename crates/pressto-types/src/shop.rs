//! Shop and service-catalog types.
//!
//! Shops and their service catalogs are owned by the shop side and are
//! read-mostly from the customer side. Orders snapshot service prices at
//! creation time; they never hold a live reference into the catalog, so
//! catalog edits and deletions cannot retroactively alter historical orders.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog entry owned by a shop: one priced service offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
	pub id: String,
	/// Kind of garment or service this entry prices, e.g. "Shirts".
	pub item_type: String,
	/// Price per piece. Non-negative.
	pub unit_price: Decimal,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

/// A shop as listed to customers while browsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
	pub id: String,
	pub name: String,
	pub rating: f64,
	/// Human-readable distance string as served by the backend, e.g. "1.2 km".
	pub distance: String,
	/// Current catalog. Informational for browsing; order items snapshot
	/// these prices at creation.
	#[serde(default)]
	pub services: Vec<Service>,
}
