//! Tab aggregation: status-to-bucket mapping and per-bucket counts.
//!
//! Counts are always computed over the full unfiltered order set. One of
//! the earlier portal builds derived counts from the post-search subset,
//! which made tab badges shrink while typing; the invariant here is that
//! the counts sum to the total order count no matter what filters are
//! active.

use pressto_types::{Order, OrderStatus};
use serde::{Deserialize, Serialize};

/// A navigation tab: a named, mutually exclusive grouping of orders by
/// status. Both roles use the same four-bucket layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Bucket {
	/// Orders awaiting shop confirmation.
	New,
	/// Orders the shop is actively working: accepted, picked up, in progress.
	Processing,
	/// Orders ready for delivery.
	Ready,
	/// Terminal orders: delivered or cancelled.
	History,
}

impl Bucket {
	/// All buckets in display order.
	pub const ALL: [Bucket; 4] = [Bucket::New, Bucket::Processing, Bucket::Ready, Bucket::History];

	/// Maps a status to its bucket. Total: every status lands in exactly
	/// one bucket.
	pub fn of(status: OrderStatus) -> Bucket {
		match status {
			OrderStatus::Pending => Bucket::New,
			OrderStatus::Accepted | OrderStatus::PickedUp | OrderStatus::InProgress => {
				Bucket::Processing
			},
			OrderStatus::Completed => Bucket::Ready,
			OrderStatus::Delivered | OrderStatus::Cancelled => Bucket::History,
		}
	}

	/// Tab label shown in navigation.
	pub fn label(&self) -> &'static str {
		match self {
			Bucket::New => "New",
			Bucket::Processing => "Processing",
			Bucket::Ready => "Ready",
			Bucket::History => "History",
		}
	}
}

/// Per-bucket order counts over the full order set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
	pub new: u64,
	pub processing: u64,
	pub ready: u64,
	pub history: u64,
}

impl BucketCounts {
	pub fn get(&self, bucket: Bucket) -> u64 {
		match bucket {
			Bucket::New => self.new,
			Bucket::Processing => self.processing,
			Bucket::Ready => self.ready,
			Bucket::History => self.history,
		}
	}

	/// Sum over all buckets; always equals the size of the counted set.
	pub fn total(&self) -> u64 {
		self.new + self.processing + self.ready + self.history
	}
}

/// Computes per-bucket counts over the entire unfiltered order set.
///
/// Must be fed the full set, never a search-narrowed subset.
pub fn counts_by_bucket(orders: &[Order]) -> BucketCounts {
	let mut counts = BucketCounts::default();
	for order in orders {
		match Bucket::of(order.status) {
			Bucket::New => counts.new += 1,
			Bucket::Processing => counts.processing += 1,
			Bucket::Ready => counts.ready += 1,
			Bucket::History => counts.history += 1,
		}
	}
	counts
}

/// Returns the orders belonging to one bucket, newest first.
///
/// Deterministic: sorted by `created_at` descending with ties broken by id,
/// so repeated renders of the same set produce the same sequence.
pub fn orders_in_bucket<'a>(orders: &'a [Order], bucket: Bucket) -> Vec<&'a Order> {
	let mut selected: Vec<&Order> = orders
		.iter()
		.filter(|order| Bucket::of(order.status) == bucket)
		.collect();
	selected.sort_by(|a, b| {
		b.created_at
			.cmp(&a.created_at)
			.then_with(|| a.id.cmp(&b.id))
	});
	selected
}
