//! Common types module for the Pressto client core.
//!
//! This module defines the core data types and structures shared by the
//! customer and shop-owner portals. It provides a centralized location for
//! the wire-format order model so both roles consume one definition.

/// API request/response payloads exchanged with the order-management backend.
pub mod api;
/// Redacting wrapper for session bearer tokens.
pub mod auth_token;
/// User-facing notification payloads.
pub mod notice;
/// The order model: status enumeration, items, addresses.
pub mod order;
/// Session role selecting the customer or shop portal surface.
pub mod role;
/// Shop and service-catalog types.
pub mod shop;

// Re-export all types for convenient access
pub use api::*;
pub use auth_token::AuthToken;
pub use notice::*;
pub use order::*;
pub use role::Role;
pub use shop::*;
