//! The order flow: fetch, derive views, dispatch mutations.
//!
//! One flow instance serves one portal. Status changes are gated by the
//! lifecycle table before any network call, mutations are followed by a
//! full refetch strictly after the acknowledgment (never an optimistic
//! local patch), and the store's fetch ticket keeps a slow fetch from
//! clobbering a newer snapshot.

use crate::notify::NotificationSink;
use crate::DispatchError;
use chrono::NaiveDate;
use pressto_lifecycle::{check_transition, counts_by_bucket, visible_orders, Bucket, BucketCounts};
use pressto_store::OrderStore;
use pressto_transport::{HttpInterface, TransportError};
use pressto_types::{
	NewOrderRequest, NoticeKind, Order, OrderStatus, Role, Shop, ShopOrdersResponse,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// Per-role order flow over the shared core.
pub struct OrderFlow {
	http: Arc<dyn HttpInterface>,
	store: Arc<OrderStore>,
	notifier: Arc<dyn NotificationSink>,
	role: Role,
	/// Orders with a status mutation currently in flight. Duplicate
	/// submissions for the same order are rejected until it settles.
	in_flight: Mutex<HashSet<String>>,
	/// Session-scoped draft of an order being composed. Cleared when the
	/// order is placed.
	draft: RwLock<Option<NewOrderRequest>>,
}

impl OrderFlow {
	pub fn new(
		http: Arc<dyn HttpInterface>,
		store: Arc<OrderStore>,
		notifier: Arc<dyn NotificationSink>,
		role: Role,
	) -> Self {
		Self {
			http,
			store,
			notifier,
			role,
			in_flight: Mutex::new(HashSet::new()),
			draft: RwLock::new(None),
		}
	}

	pub fn role(&self) -> Role {
		self.role
	}

	pub fn store(&self) -> &Arc<OrderStore> {
		&self.store
	}

	fn orders_path(&self) -> &'static str {
		match self.role {
			Role::Customer => "/customer/orders",
			Role::Shop => "/shop/orders",
		}
	}

	/// Refetches the full order collection and installs it in the store.
	///
	/// Stale results (a newer fetch finished first) are dropped by the
	/// store's ticket check.
	pub async fn refresh_orders(&self) -> Result<(), DispatchError> {
		let ticket = self.store.begin_fetch();
		let value = self.http.get(self.orders_path()).await?;
		let orders = decode_orders(value)?;
		self.store.complete_fetch(ticket, orders).await;
		Ok(())
	}

	/// Tab counts over the full, unfiltered order set.
	pub async fn counts(&self) -> BucketCounts {
		counts_by_bucket(&self.store.snapshot().await)
	}

	/// The orders one tab displays after search and date filtering.
	///
	/// Never feeds [`OrderFlow::counts`]; counts are computed before any
	/// filtering.
	pub async fn visible(
		&self,
		bucket: Bucket,
		query: &str,
		date: Option<NaiveDate>,
	) -> Vec<Order> {
		let snapshot = self.store.snapshot().await;
		visible_orders(&snapshot, bucket, query, date)
			.into_iter()
			.cloned()
			.collect()
	}

	/// Requests a status transition for one order.
	///
	/// Validates legality locally first and fails fast without any network
	/// call on an illegal request. On a successful acknowledgment the order
	/// collection is refetched before this returns, so callers never
	/// observe stale bucket counts after awaiting it.
	pub async fn request_transition(
		&self,
		order_id: &str,
		new_status: OrderStatus,
	) -> Result<(), DispatchError> {
		let result = self.try_transition(order_id, new_status).await;
		match &result {
			Ok(()) => {
				self.notifier.notify(
					NoticeKind::Success,
					&format!("Order {} updated to {}", order_id, new_status),
				);
			},
			Err(DispatchError::Busy(_)) => {
				// The triggering control should already be disabled; stay quiet.
			},
			Err(err) => {
				self.notifier.notify(NoticeKind::Error, &err.to_string());
			},
		}
		result
	}

	async fn try_transition(
		&self,
		order_id: &str,
		new_status: OrderStatus,
	) -> Result<(), DispatchError> {
		let order = self
			.store
			.find(order_id)
			.await
			.ok_or_else(|| DispatchError::UnknownOrder(order_id.to_string()))?;

		// Local legality gate: an illegal request never reaches the network.
		check_transition(order.status, new_status)?;

		{
			let mut in_flight = self.in_flight.lock().await;
			if !in_flight.insert(order_id.to_string()) {
				return Err(DispatchError::Busy(order_id.to_string()));
			}
		}

		let result = self.dispatch_transition(order_id, new_status).await;
		self.in_flight.lock().await.remove(order_id);
		result
	}

	async fn dispatch_transition(
		&self,
		order_id: &str,
		new_status: OrderStatus,
	) -> Result<(), DispatchError> {
		self.http
			.put(
				&format!("/shop/orders/{}/status", order_id),
				json!({ "status": new_status }),
			)
			.await?;

		// Refetch strictly after the acknowledgment. The backend owns the
		// canonical order state; a local patch would go stale against
		// concurrent customer/shop views of the same order.
		self.refresh_orders().await
	}

	/// Places a new order.
	///
	/// Required address fields and a non-zero total item count are checked
	/// client-side before any request is issued. On success the draft is
	/// cleared and the order collection refetched.
	pub async fn create_order(&self, request: &NewOrderRequest) -> Result<String, DispatchError> {
		let result = self.try_create(request).await;
		match &result {
			Ok(id) => {
				self.notifier
					.notify(NoticeKind::Success, &format!("Order {} placed", id));
			},
			Err(err) => {
				self.notifier.notify(NoticeKind::Error, &err.to_string());
			},
		}
		result
	}

	async fn try_create(&self, request: &NewOrderRequest) -> Result<String, DispatchError> {
		validate_new_order(request)?;

		let body = serde_json::to_value(request)
			.map_err(|e| TransportError::Decode(e.to_string()))?;
		let value = self.http.post("/orders", body).await?;
		let created: pressto_types::CreatedOrder = serde_json::from_value(value)
			.map_err(|e| TransportError::Decode(e.to_string()))?;

		self.clear_draft().await;
		self.refresh_orders().await?;
		Ok(created.id)
	}

	/// Fetches the shops available to order from, with their current
	/// catalogs. Browsing data only; placed orders snapshot prices and are
	/// unaffected by later catalog changes.
	pub async fn list_shops(&self) -> Result<Vec<Shop>, DispatchError> {
		let value = self.http.get("/shop").await?;
		let shops =
			serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))?;
		Ok(shops)
	}

	/// Stores the in-progress order draft for this session.
	pub async fn set_draft(&self, draft: NewOrderRequest) {
		*self.draft.write().await = Some(draft);
	}

	pub async fn draft(&self) -> Option<NewOrderRequest> {
		self.draft.read().await.clone()
	}

	pub async fn clear_draft(&self) {
		*self.draft.write().await = None;
	}
}

/// Client-side validation of a new order request.
fn validate_new_order(request: &NewOrderRequest) -> Result<(), DispatchError> {
	let mut problems: Vec<String> = request
		.pickup_address
		.missing_fields()
		.into_iter()
		.map(|field| format!("pickup address is missing {}", field))
		.collect();
	if request.total_item_count() == 0 {
		problems.push("order must contain at least one item".to_string());
	}
	if request.items.iter().any(|item| item.unit_price < Decimal::ZERO) {
		problems.push("item prices cannot be negative".to_string());
	}
	if problems.is_empty() {
		Ok(())
	} else {
		Err(DispatchError::Validation(problems.join("; ")))
	}
}

/// Decodes an order listing response.
///
/// Accepts a bare array, the shop shape `{orders, counts}`, or an envelope
/// `{data: [...]}`. A server-provided counts block is only a cache hint
/// and is ignored; counts are always recomputed locally from the full set.
fn decode_orders(value: Value) -> Result<Vec<Order>, TransportError> {
	let decode_error = |e: serde_json::Error| TransportError::Decode(e.to_string());

	if value.is_array() {
		return serde_json::from_value(value).map_err(decode_error);
	}
	let Value::Object(mut map) = value else {
		return Err(TransportError::Decode(
			"order listing is neither an array nor an envelope".to_string(),
		));
	};
	if map.contains_key("orders") {
		let response: ShopOrdersResponse =
			serde_json::from_value(Value::Object(map)).map_err(decode_error)?;
		if response.counts.is_some() {
			debug!("ignoring server-side counts hint; recomputing locally");
		}
		return Ok(response.orders);
	}
	match map.remove("data") {
		Some(data) => serde_json::from_value(data).map_err(decode_error),
		None => Err(TransportError::Decode(
			"order listing is neither an array nor an envelope".to_string(),
		)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_support::{order_value, sample_request, MockHttp, RecordingSink};

	fn flow_with(
		http: Arc<MockHttp>,
		sink: Arc<RecordingSink>,
		role: Role,
	) -> OrderFlow {
		OrderFlow::new(http, Arc::new(OrderStore::new()), sink, role)
	}

	#[tokio::test]
	async fn accepting_a_pending_order_moves_it_between_buckets() {
		let http = Arc::new(MockHttp::new());
		let sink = Arc::new(RecordingSink::new());
		let flow = flow_with(http.clone(), sink.clone(), Role::Shop);

		http.expect(
			"GET",
			"/shop/orders",
			Ok(json!({ "orders": [order_value("ORD001", "pending")] })),
		);
		flow.refresh_orders().await.unwrap();

		let before = flow.counts().await;
		assert_eq!(before.get(Bucket::New), 1);
		assert_eq!(before.get(Bucket::Processing), 0);

		http.expect("PUT", "/shop/orders/ORD001/status", Ok(json!({ "ok": true })));
		http.expect(
			"GET",
			"/shop/orders",
			Ok(json!({ "orders": [order_value("ORD001", "accepted")] })),
		);
		flow.request_transition("ORD001", OrderStatus::Accepted)
			.await
			.unwrap();

		let after = flow.counts().await;
		assert_eq!(after.get(Bucket::New), 0);
		assert_eq!(after.get(Bucket::Processing), 1);

		// The mutation body carried the camelCase status tag.
		let put_body = http.body_of("PUT /shop/orders/ORD001/status").unwrap();
		assert_eq!(put_body, json!({ "status": "accepted" }));

		// The refetch was sequenced after the mutation acknowledgment.
		let calls = http.call_keys();
		assert_eq!(
			calls,
			vec![
				"GET /shop/orders",
				"PUT /shop/orders/ORD001/status",
				"GET /shop/orders",
			]
		);

		let notices = sink.notices();
		assert_eq!(notices.len(), 1);
		assert_eq!(notices[0].kind, NoticeKind::Success);
	}

	#[tokio::test]
	async fn illegal_transition_fails_locally_without_network_traffic() {
		let http = Arc::new(MockHttp::new());
		let sink = Arc::new(RecordingSink::new());
		let flow = flow_with(http.clone(), sink.clone(), Role::Shop);

		http.expect(
			"GET",
			"/shop/orders",
			Ok(json!([order_value("ORD002", "completed")])),
		);
		flow.refresh_orders().await.unwrap();

		let err = flow
			.request_transition("ORD002", OrderStatus::Cancelled)
			.await
			.unwrap_err();
		assert!(matches!(err, DispatchError::InvalidTransition(_)));

		// Only the initial fetch hit the network; the order is unchanged.
		assert_eq!(http.call_keys(), vec!["GET /shop/orders"]);
		let order = flow.store().find("ORD002").await.unwrap();
		assert_eq!(order.status, OrderStatus::Completed);
		assert_eq!(flow.counts().await.get(Bucket::Ready), 1);

		let notices = sink.notices();
		assert_eq!(notices.len(), 1);
		assert_eq!(notices[0].kind, NoticeKind::Error);
	}

	#[tokio::test]
	async fn unknown_order_is_rejected_before_dispatch() {
		let http = Arc::new(MockHttp::new());
		let sink = Arc::new(RecordingSink::new());
		let flow = flow_with(http.clone(), sink.clone(), Role::Shop);

		let err = flow
			.request_transition("ORD404", OrderStatus::Accepted)
			.await
			.unwrap_err();
		assert!(matches!(err, DispatchError::UnknownOrder(_)));
		assert!(http.call_keys().is_empty());
	}

	#[tokio::test]
	async fn duplicate_submission_for_the_same_order_is_rejected() {
		let http = Arc::new(MockHttp::new());
		let sink = Arc::new(RecordingSink::new());
		let flow = flow_with(http.clone(), sink.clone(), Role::Shop);

		http.expect(
			"GET",
			"/shop/orders",
			Ok(json!([order_value("ORD003", "pending")])),
		);
		flow.refresh_orders().await.unwrap();

		// Simulate an in-flight mutation for this order.
		flow.in_flight.lock().await.insert("ORD003".to_string());

		let err = flow
			.request_transition("ORD003", OrderStatus::Accepted)
			.await
			.unwrap_err();
		assert!(matches!(err, DispatchError::Busy(_)));
		// No mutation was issued and no notice emitted for the debounce.
		assert_eq!(http.call_keys(), vec!["GET /shop/orders"]);
		assert!(sink.notices().is_empty());
	}

	#[tokio::test]
	async fn transport_failure_surfaces_one_error_notice_and_leaves_state() {
		let http = Arc::new(MockHttp::new());
		let sink = Arc::new(RecordingSink::new());
		let flow = flow_with(http.clone(), sink.clone(), Role::Shop);

		http.expect(
			"GET",
			"/shop/orders",
			Ok(json!([order_value("ORD004", "pending")])),
		);
		flow.refresh_orders().await.unwrap();

		http.expect(
			"PUT",
			"/shop/orders/ORD004/status",
			Err(TransportError::Server {
				status: 500,
				message: "database unavailable".to_string(),
			}),
		);

		let err = flow
			.request_transition("ORD004", OrderStatus::Accepted)
			.await
			.unwrap_err();
		assert!(matches!(err, DispatchError::Transport(_)));

		// No refetch after a failed mutation; the store is untouched.
		assert_eq!(
			http.call_keys(),
			vec!["GET /shop/orders", "PUT /shop/orders/ORD004/status"]
		);
		let order = flow.store().find("ORD004").await.unwrap();
		assert_eq!(order.status, OrderStatus::Pending);

		let notices = sink.notices();
		assert_eq!(notices.len(), 1);
		assert_eq!(notices[0].kind, NoticeKind::Error);
		assert!(notices[0].message.contains("database unavailable"));

		// The in-flight guard was released; a retry can proceed.
		http.expect("PUT", "/shop/orders/ORD004/status", Ok(json!({ "ok": true })));
		http.expect(
			"GET",
			"/shop/orders",
			Ok(json!([order_value("ORD004", "accepted")])),
		);
		flow.request_transition("ORD004", OrderStatus::Accepted)
			.await
			.unwrap();
	}

	#[tokio::test]
	async fn creating_an_order_with_no_items_fails_before_any_request() {
		let http = Arc::new(MockHttp::new());
		let sink = Arc::new(RecordingSink::new());
		let flow = flow_with(http.clone(), sink.clone(), Role::Customer);

		let mut request = sample_request();
		for item in &mut request.items {
			item.count = 0;
		}

		let err = flow.create_order(&request).await.unwrap_err();
		assert!(matches!(err, DispatchError::Validation(_)));
		assert!(err.to_string().contains("at least one item"));
		assert!(http.call_keys().is_empty());
	}

	#[tokio::test]
	async fn creating_an_order_with_a_partial_address_fails_before_any_request() {
		let http = Arc::new(MockHttp::new());
		let sink = Arc::new(RecordingSink::new());
		let flow = flow_with(http.clone(), sink.clone(), Role::Customer);

		let mut request = sample_request();
		request.pickup_address.pincode = String::new();

		let err = flow.create_order(&request).await.unwrap_err();
		assert!(err.to_string().contains("pincode"));
		assert!(http.call_keys().is_empty());
	}

	#[tokio::test]
	async fn placing_an_order_clears_the_draft_and_refetches() {
		let http = Arc::new(MockHttp::new());
		let sink = Arc::new(RecordingSink::new());
		let flow = flow_with(http.clone(), sink.clone(), Role::Customer);

		let request = sample_request();
		flow.set_draft(request.clone()).await;
		assert!(flow.draft().await.is_some());

		http.expect("POST", "/orders", Ok(json!({ "id": "ORD010" })));
		http.expect(
			"GET",
			"/customer/orders",
			Ok(json!([order_value("ORD010", "pending")])),
		);

		let id = flow.create_order(&request).await.unwrap();
		assert_eq!(id, "ORD010");
		assert!(flow.draft().await.is_none());
		assert_eq!(flow.store().len().await, 1);
		assert_eq!(
			http.call_keys(),
			vec!["POST /orders", "GET /customer/orders"]
		);
	}

	#[tokio::test]
	async fn unknown_status_from_the_backend_fails_the_refetch() {
		let http = Arc::new(MockHttp::new());
		let sink = Arc::new(RecordingSink::new());
		let flow = flow_with(http.clone(), sink.clone(), Role::Customer);

		http.expect(
			"GET",
			"/customer/orders",
			Ok(json!([order_value("ORD020", "shipped")])),
		);

		let err = flow.refresh_orders().await.unwrap_err();
		assert!(matches!(
			err,
			DispatchError::Transport(TransportError::Decode(_))
		));
		assert!(flow.store().is_empty().await);
	}

	#[test]
	fn order_listing_decodes_all_three_wire_shapes() {
		let bare = json!([order_value("ORD040", "pending")]);
		assert_eq!(decode_orders(bare).unwrap().len(), 1);

		let shop = json!({
			"orders": [order_value("ORD041", "pending")],
			"counts": { "pending": 7 },
		});
		assert_eq!(decode_orders(shop).unwrap().len(), 1);

		let envelope = json!({ "success": true, "data": [order_value("ORD042", "pending")] });
		assert_eq!(decode_orders(envelope).unwrap().len(), 1);

		let junk = json!("nope");
		assert!(decode_orders(junk).is_err());
	}

	#[tokio::test]
	async fn lists_shops_with_their_catalogs() {
		let http = Arc::new(MockHttp::new());
		let sink = Arc::new(RecordingSink::new());
		let flow = flow_with(http.clone(), sink.clone(), Role::Customer);

		http.expect(
			"GET",
			"/shop",
			Ok(json!([{
				"id": "SHOP01",
				"name": "Premium Pressers",
				"rating": 4.6,
				"distance": "1.2 km",
				"services": [
					{ "id": "SVC1", "itemType": "Shirts", "unitPrice": 15 },
				],
			}])),
		);

		let shops = flow.list_shops().await.unwrap();
		assert_eq!(shops.len(), 1);
		assert_eq!(shops[0].name, "Premium Pressers");
		assert_eq!(shops[0].services[0].item_type, "Shirts");
	}

	#[tokio::test]
	async fn search_narrows_the_view_but_not_the_counts() {
		let http = Arc::new(MockHttp::new());
		let sink = Arc::new(RecordingSink::new());
		let flow = flow_with(http.clone(), sink.clone(), Role::Customer);

		http.expect(
			"GET",
			"/customer/orders",
			Ok(json!([
				order_value("ORD030", "pending"),
				order_value("ORD031", "pending"),
			])),
		);
		flow.refresh_orders().await.unwrap();

		let visible = flow.visible(Bucket::New, "ord030", None).await;
		assert_eq!(visible.len(), 1);
		assert_eq!(visible[0].id, "ORD030");

		// Counts reflect the full set regardless of the active search.
		assert_eq!(flow.counts().await.get(Bucket::New), 2);
	}
}
