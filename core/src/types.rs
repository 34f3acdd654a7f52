//! Wire DTOs for the deals API.
//!
//! # Design
//! Rust-side field names follow the form inputs the values are read from;
//! serde renames map them to the API's `user_*` and `product_*` wire keys.
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// Registration payload built from the form's current field values.
///
/// Every field is sent exactly as read, empty strings included. No
/// client-side validation happens before serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    #[serde(rename = "user_email")]
    pub email: String,
    #[serde(rename = "user_full_name")]
    pub full_name: String,
    #[serde(rename = "user_location")]
    pub location: String,
}

/// A single user returned by the collection endpoint.
///
/// The server sends additional fields (id, counters, role); only the four
/// rendered ones are kept, the rest are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    #[serde(rename = "user_email")]
    pub email: String,
    #[serde(rename = "user_full_name")]
    pub full_name: String,
    #[serde(rename = "user_location")]
    pub location: String,
}

/// One entry of the purchases summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(rename = "product_title")]
    pub title: String,
    #[serde(rename = "product_price")]
    pub price: f64,
}

/// Registration reply envelope. `message` is optional on the wire; the
/// client substitutes a fixed default when it is missing.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterReply {
    pub message: Option<String>,
}

/// Purchases summary envelope. The server also sends a `message` alongside
/// the list; the client does not use it.
#[derive(Debug, Clone, Deserialize)]
pub struct PurchasesReply {
    pub purchases: Vec<PurchaseRecord>,
}

/// Add-purchase reply. The server always includes the message, so it is not
/// optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct AddPurchaseReply {
    pub message: String,
}
