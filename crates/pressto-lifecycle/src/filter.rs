//! Search and date filters over an order listing.
//!
//! Filters narrow what a tab displays; they never feed the tab counts,
//! which are computed from the full set before any filtering.

use crate::tabs::{orders_in_bucket, Bucket};
use chrono::NaiveDate;
use pressto_types::Order;

/// Case-insensitive substring filter over order id and counterpart name.
///
/// An empty or whitespace-only query is the identity: the input sequence is
/// returned unchanged in both contents and order. Idempotent for any query.
pub fn filter_orders<'a>(orders: &[&'a Order], query: &str) -> Vec<&'a Order> {
	let needle = query.trim().to_lowercase();
	if needle.is_empty() {
		return orders.to_vec();
	}
	orders
		.iter()
		.filter(|order| {
			order.id.to_lowercase().contains(&needle)
				|| order.counterpart_name.to_lowercase().contains(&needle)
		})
		.copied()
		.collect()
}

/// Exact calendar-date filter over `pickup_date`. `None` is the identity.
pub fn filter_by_date<'a>(orders: &[&'a Order], date: Option<NaiveDate>) -> Vec<&'a Order> {
	match date {
		None => orders.to_vec(),
		Some(date) => orders
			.iter()
			.filter(|order| order.pickup_date == date)
			.copied()
			.collect(),
	}
}

/// The orders a tab actually displays: bucket selection first, then search,
/// then date. Bucket selection must come first since the counts shown on
/// the tabs are computed before any of this runs.
pub fn visible_orders<'a>(
	orders: &'a [Order],
	bucket: Bucket,
	query: &str,
	date: Option<NaiveDate>,
) -> Vec<&'a Order> {
	let bucketed = orders_in_bucket(orders, bucket);
	let searched = filter_orders(&bucketed, query);
	filter_by_date(&searched, date)
}
