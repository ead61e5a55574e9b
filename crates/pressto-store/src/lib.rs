//! Order store for the Pressto client core.
//!
//! Holds the current actor's order collection in memory. The store owns no
//! persistence; it is refreshed wholesale by refetching from the backend.
//! Installs are sequenced with a monotonic fetch ticket so a slow early
//! fetch can never overwrite the result of a later one (last write wins by
//! issue order, not completion order).

use pressto_types::Order;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

/// Token identifying one fetch attempt. Issued monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// In-memory collection of the current actor's orders.
#[derive(Debug, Default)]
pub struct OrderStore {
	inner: RwLock<Inner>,
	next_ticket: AtomicU64,
}

#[derive(Debug, Default)]
struct Inner {
	orders: Vec<Order>,
	/// Ticket of the fetch whose result is currently installed.
	installed: u64,
}

impl OrderStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Issues a ticket for a fetch that is about to start.
	pub fn begin_fetch(&self) -> FetchTicket {
		FetchTicket(self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1)
	}

	/// Installs a fetch result, unless a later fetch already landed.
	///
	/// Returns whether the snapshot was installed. A stale result is
	/// dropped silently apart from a debug log; the newer snapshot it
	/// would have clobbered stays in place.
	pub async fn complete_fetch(&self, ticket: FetchTicket, orders: Vec<Order>) -> bool {
		let mut inner = self.inner.write().await;
		if ticket.0 <= inner.installed {
			debug!(
				ticket = ticket.0,
				installed = inner.installed,
				"dropping stale fetch result"
			);
			return false;
		}
		inner.installed = ticket.0;
		inner.orders = orders;
		true
	}

	/// Current snapshot of all orders, in backend fetch order.
	pub async fn snapshot(&self) -> Vec<Order> {
		self.inner.read().await.orders.clone()
	}

	/// Looks up one order by id.
	pub async fn find(&self, id: &str) -> Option<Order> {
		self.inner
			.read()
			.await
			.orders
			.iter()
			.find(|order| order.id == id)
			.cloned()
	}

	pub async fn len(&self) -> usize {
		self.inner.read().await.orders.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.inner.read().await.orders.is_empty()
	}

	/// Empties the store, e.g. on logout.
	///
	/// Also invalidates every fetch ticketed so far, so a request issued
	/// before the clear cannot repopulate the store when it completes.
	pub async fn clear(&self) {
		let mut inner = self.inner.write().await;
		inner.orders.clear();
		inner.installed = self.next_ticket.load(Ordering::SeqCst);
	}
}
