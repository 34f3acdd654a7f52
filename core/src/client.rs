//! Stateless HTTP request builder and response parser for the deals API.
//!
//! # Design
//! `DealsClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`. The
//! caller executes the actual HTTP round-trip, keeping the core deterministic
//! and free of I/O dependencies.
//!
//! Status codes are never inspected by the parse methods: the body is parsed
//! as-is regardless of what the server answered, which is exactly how the
//! page script this client replaces behaved.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    AddPurchaseReply, PurchaseRecord, PurchasesReply, RegisterReply, RegistrationForm, UserRecord,
};

/// Notification text shown when the registration reply carries no message.
pub const DEFAULT_REGISTER_MESSAGE: &str = "User registered successfully!";

/// Synchronous, stateless client for the deals API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct DealsClient {
    base_url: String,
}

impl DealsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// POST the registration form as JSON. All five wire fields are always
    /// present in the body, even when the form inputs were left empty.
    pub fn build_register(&self, form: &RegistrationForm) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(form).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/register", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_list_users(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_purchases_total(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/purchases/total", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// POST an empty-bodied add-purchase for the given deal. The server
    /// resolves the deal id against its catalog and records the purchase.
    pub fn build_add_purchase(&self, deal_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/purchases/{deal_id}/add", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Extract the server's registration message, falling back to
    /// `DEFAULT_REGISTER_MESSAGE` when the field is missing or empty.
    pub fn parse_register(&self, response: HttpResponse) -> Result<String, ApiError> {
        let reply: RegisterReply = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(reply
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_REGISTER_MESSAGE.to_string()))
    }

    /// Parse the user collection, preserving server order.
    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<UserRecord>, ApiError> {
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Parse the purchases summary envelope and return the inner list,
    /// preserving server order.
    pub fn parse_purchases_total(&self, response: HttpResponse) -> Result<Vec<PurchaseRecord>, ApiError> {
        let reply: PurchasesReply = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(reply.purchases)
    }

    pub fn parse_add_purchase(&self, response: HttpResponse) -> Result<String, ApiError> {
        let reply: AddPurchaseReply = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(reply.message)
    }
}
