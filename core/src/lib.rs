//! Client core for the deals API page flows: registration submit plus the
//! user-table and purchases-list views.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trips; rendering happens into explicit `Container`
//! handles rather than ambient document state.
//!
//! # Design
//! - `DealsClient` is stateless, holding only `base_url`.
//! - Each API operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `Page` models the startup wiring of one page: which triggers get
//!   handlers, which containers gate which loads, and how completed calls
//!   are applied back onto the page.
//! - Status codes are not interpreted; bodies are parsed as-is, matching the
//!   page behavior this crate reproduces.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod page;
pub mod render;
pub mod types;

pub use client::{DealsClient, DEFAULT_REGISTER_MESSAGE};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use page::{Binding, CallKind, Handler, Page, PendingCall, Trigger};
pub use render::{render_purchase_items, render_user_rows, Container};
pub use types::{
    AddPurchaseReply, PurchaseRecord, PurchasesReply, RegisterReply, RegistrationForm, UserRecord,
};
