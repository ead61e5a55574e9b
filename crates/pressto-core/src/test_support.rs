//! Shared doubles for dispatch-layer tests: a scripted transport and a
//! recording notification sink.

use crate::notify::NotificationSink;
use async_trait::async_trait;
use pressto_transport::{HttpInterface, TransportError};
use pressto_types::{NewOrderRequest, Notice, NoticeKind, OrderItem, PickupAddress};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Scripted transport double.
///
/// Responses are queued per `"METHOD path"` key and consumed in order; an
/// unscripted request panics so tests cannot silently hit the network
/// boundary they meant to forbid.
#[derive(Default)]
pub struct MockHttp {
	responses: Mutex<HashMap<String, VecDeque<Result<Value, TransportError>>>>,
	calls: Mutex<Vec<(String, Option<Value>)>>,
}

impl MockHttp {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn expect(&self, method: &str, path: &str, response: Result<Value, TransportError>) {
		self.responses
			.lock()
			.unwrap()
			.entry(format!("{} {}", method, path))
			.or_default()
			.push_back(response);
	}

	/// Every request issued so far, as `"METHOD path"` keys in call order.
	pub fn call_keys(&self) -> Vec<String> {
		self.calls
			.lock()
			.unwrap()
			.iter()
			.map(|(key, _)| key.clone())
			.collect()
	}

	/// The body sent with the first call matching the key.
	pub fn body_of(&self, key: &str) -> Option<Value> {
		self.calls
			.lock()
			.unwrap()
			.iter()
			.find(|(k, _)| k == key)
			.and_then(|(_, body)| body.clone())
	}

	fn respond(
		&self,
		method: &str,
		path: &str,
		body: Option<Value>,
	) -> Result<Value, TransportError> {
		let key = format!("{} {}", method, path);
		self.calls.lock().unwrap().push((key.clone(), body));
		self.responses
			.lock()
			.unwrap()
			.get_mut(&key)
			.and_then(VecDeque::pop_front)
			.unwrap_or_else(|| panic!("unexpected request: {}", key))
	}
}

#[async_trait]
impl HttpInterface for MockHttp {
	async fn get(&self, path: &str) -> Result<Value, TransportError> {
		self.respond("GET", path, None)
	}

	async fn post(&self, path: &str, body: Value) -> Result<Value, TransportError> {
		self.respond("POST", path, Some(body))
	}

	async fn put(&self, path: &str, body: Value) -> Result<Value, TransportError> {
		self.respond("PUT", path, Some(body))
	}

	async fn delete(&self, path: &str) -> Result<Value, TransportError> {
		self.respond("DELETE", path, None)
	}
}

/// Sink that records every notice for later assertions.
#[derive(Default)]
pub struct RecordingSink {
	notices: Mutex<Vec<Notice>>,
}

impl RecordingSink {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn notices(&self) -> Vec<Notice> {
		self.notices.lock().unwrap().clone()
	}
}

impl NotificationSink for RecordingSink {
	fn notify(&self, kind: NoticeKind, message: &str) {
		self.notices
			.lock()
			.unwrap()
			.push(Notice::new(kind, message));
	}
}

/// An order record as the backend would serve it.
pub fn order_value(id: &str, status: &str) -> Value {
	json!({
		"id": id,
		"counterpartName": "Premium Pressers",
		"items": [
			{ "itemType": "Shirts", "count": 3, "unitPrice": 15 },
			{ "itemType": "Pants", "count": 2, "unitPrice": 25 },
		],
		"status": status,
		"pickupDate": "2026-08-28",
		"totalAmount": 95,
		"pickupAddress": {
			"street": "12 MG Road",
			"city": "Bengaluru",
			"state": "Karnataka",
			"pincode": "560001",
		},
		"createdAt": "2026-08-15T10:00:00Z",
	})
}

/// A well-formed new-order request; tests mutate it to break invariants.
pub fn sample_request() -> NewOrderRequest {
	NewOrderRequest {
		shop_id: "SHOP01".to_string(),
		items: vec![
			OrderItem {
				item_type: "Shirts".to_string(),
				count: 3,
				unit_price: dec!(15),
			},
			OrderItem {
				item_type: "Pants".to_string(),
				count: 2,
				unit_price: dec!(25),
			},
		],
		pickup_date: "2026-08-28".parse().unwrap(),
		pickup_address: PickupAddress {
			street: "12 MG Road".to_string(),
			landmark: None,
			city: "Bengaluru".to_string(),
			state: "Karnataka".to_string(),
			pincode: "560001".to_string(),
		},
		special_instructions: Some("Light starch".to_string()),
	}
}
