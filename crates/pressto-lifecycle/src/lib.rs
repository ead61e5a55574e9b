//! Order lifecycle module for the Pressto client core.
//!
//! This module centralizes everything derived from an order's status: the
//! legal-transition table, per-status display metadata, the status-to-tab
//! bucketing used for navigation counts, and the search/date filters that
//! narrow a tab's contents. All of it is pure and synchronous; the dispatch
//! layer consults it before touching the network.
//!
//! Earlier portal builds carried several drifting copies of these rules
//! inline in their views. They are deliberately collapsed here so both roles
//! consume one definition.

pub mod filter;
pub mod status;
pub mod tabs;

pub use filter::{filter_by_date, filter_orders, visible_orders};
pub use status::{
	apply_transition, check_transition, is_terminal, legal_next_statuses, status_info, Actor,
	ColorCategory, InvalidTransition, StatusInfo,
};
pub use tabs::{counts_by_bucket, orders_in_bucket, Bucket, BucketCounts};
