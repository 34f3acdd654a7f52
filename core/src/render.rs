//! Markup rendering for user rows and purchase items.
//!
//! # Design
//! `Container` stands in for a page element the script would look up by id:
//! an append-only buffer of HTML fragments. Render functions take the target
//! container as an explicit handle instead of reaching for ambient document
//! state. Nothing ever clears a container, so repeated loads append repeated
//! rows; that duplicate-on-reload behavior is part of the contract, not an
//! accident of this implementation.
//!
//! Field values are interpolated verbatim, without HTML escaping.

use crate::types::{PurchaseRecord, UserRecord};

/// Append-only markup buffer standing in for a page container element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    markup: String,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated markup, fragments in append order.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    fn push_fragment(&mut self, fragment: &str) {
        self.markup.push_str(fragment);
    }
}

/// Append one table row per user, cells in username, email, full name,
/// location order.
pub fn render_user_rows(container: &mut Container, users: &[UserRecord]) {
    for user in users {
        container.push_fragment(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            user.username, user.email, user.full_name, user.location
        ));
    }
}

/// Append one `"{title} - ${price}"` list item per purchase.
pub fn render_purchase_items(container: &mut Container, purchases: &[PurchaseRecord]) {
    for purchase in purchases {
        container.push_fragment(&format!(
            "<li class=\"list-group-item\">{} - ${}</li>",
            purchase.title, purchase.price
        ));
    }
}
