//! API request/response payloads for the order-management backend.
//!
//! These mirror the backend's JSON wire shapes. The shop order listing may
//! carry a server-computed `counts` block; it is treated as a cache hint and
//! always recomputed locally from the order set.

use crate::order::{Order, OrderItem, OrderStatus, PickupAddress};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Payload for creating a new order (`POST /orders`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
	pub shop_id: String,
	pub items: Vec<OrderItem>,
	pub pickup_date: NaiveDate,
	pub pickup_address: PickupAddress,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub special_instructions: Option<String>,
}

impl NewOrderRequest {
	/// Total number of pieces across all line items.
	pub fn total_item_count(&self) -> u32 {
		self.items.iter().map(|item| item.count).sum()
	}

	/// Order total derived from the item snapshots.
	pub fn total_amount(&self) -> Decimal {
		self.items.iter().map(|item| item.line_total()).sum()
	}
}

/// Acknowledgment for a created order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedOrder {
	/// Backend-assigned identifier of the new order.
	pub id: String,
}

/// Body of a status mutation request (`PUT /shop/orders/{id}/status`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChangeRequest {
	pub status: OrderStatus,
}

/// Shop-side order listing response.
///
/// The optional `counts` block is a server-side cache hint keyed by status
/// tag. It is not authoritative and is never used for tab counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopOrdersResponse {
	pub orders: Vec<Order>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub counts: Option<HashMap<String, u64>>,
}

/// Payload for creating or updating a catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePayload {
	pub item_type: String,
	pub unit_price: Decimal,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}
