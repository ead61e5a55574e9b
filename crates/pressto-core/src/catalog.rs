//! Shop-side service catalog management.
//!
//! Create, edit and delete the shop's priced offerings. Orders snapshot
//! prices at creation, so nothing here can retroactively alter a
//! historical order; deleting a service only removes it from the catalog.

use crate::notify::NotificationSink;
use crate::DispatchError;
use pressto_transport::{HttpInterface, TransportError};
use pressto_types::{NoticeKind, Service, ServicePayload};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Client for the shop's service-catalog endpoints.
pub struct ShopCatalog {
	http: Arc<dyn HttpInterface>,
	notifier: Arc<dyn NotificationSink>,
}

impl ShopCatalog {
	pub fn new(http: Arc<dyn HttpInterface>, notifier: Arc<dyn NotificationSink>) -> Self {
		Self { http, notifier }
	}

	/// Fetches the current catalog.
	pub async fn list(&self) -> Result<Vec<Service>, DispatchError> {
		let value = self.http.get("/shop/services").await?;
		let services =
			serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))?;
		Ok(services)
	}

	/// Adds a new service to the catalog.
	pub async fn create(&self, payload: &ServicePayload) -> Result<(), DispatchError> {
		let result = self.dispatch_create(payload).await;
		self.report(&result, "Service added");
		result
	}

	/// Updates an existing service.
	pub async fn update(&self, id: &str, payload: &ServicePayload) -> Result<(), DispatchError> {
		let result = self.dispatch_update(id, payload).await;
		self.report(&result, "Service updated");
		result
	}

	/// Removes a service from the catalog. Historical orders keep their
	/// price snapshots.
	pub async fn delete(&self, id: &str) -> Result<(), DispatchError> {
		let result = self
			.http
			.delete(&format!("/shop/services/{}", id))
			.await
			.map(|_| ())
			.map_err(DispatchError::from);
		self.report(&result, "Service deleted");
		result
	}

	async fn dispatch_create(&self, payload: &ServicePayload) -> Result<(), DispatchError> {
		validate_service(payload)?;
		let body = serde_json::to_value(payload)
			.map_err(|e| TransportError::Decode(e.to_string()))?;
		self.http.post("/shop/services", body).await?;
		Ok(())
	}

	async fn dispatch_update(&self, id: &str, payload: &ServicePayload) -> Result<(), DispatchError> {
		validate_service(payload)?;
		let body = serde_json::to_value(payload)
			.map_err(|e| TransportError::Decode(e.to_string()))?;
		self.http
			.put(&format!("/shop/services/{}", id), body)
			.await?;
		Ok(())
	}

	fn report(&self, result: &Result<(), DispatchError>, success: &str) {
		match result {
			Ok(()) => self.notifier.notify(NoticeKind::Success, success),
			Err(err) => self.notifier.notify(NoticeKind::Error, &err.to_string()),
		}
	}
}

/// Client-side validation of a catalog entry.
fn validate_service(payload: &ServicePayload) -> Result<(), DispatchError> {
	let mut problems = Vec::new();
	if payload.item_type.trim().is_empty() {
		problems.push("service type must not be empty".to_string());
	}
	if payload.unit_price < Decimal::ZERO {
		problems.push("price cannot be negative".to_string());
	}
	if problems.is_empty() {
		Ok(())
	} else {
		Err(DispatchError::Validation(problems.join("; ")))
	}
}
