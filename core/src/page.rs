//! Page wiring: named triggers, handler bindings, and container-gated loads.
//!
//! # Design
//! `Page` captures what the script sees at startup: whether the registration
//! form exists and which render containers are present on this particular
//! page. `wire` is the explicit registration step binding triggers to
//! handlers for the lifetime of the page. `on_page_ready` and
//! `submit_registration` produce the HTTP calls those handlers issue;
//! `complete` applies one finished round-trip back onto the page.
//!
//! In-flight calls are not serialized against each other: the host may
//! execute them concurrently and apply completions in any order. Repeated
//! triggers append to the containers again, they never replace.

use crate::client::DealsClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::render::{render_purchase_items, render_user_rows, Container};
use crate::types::RegistrationForm;

/// Named page events a handler can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The page finished loading.
    PageReady,
    /// The registration form was submitted. Binding this trigger replaces
    /// the default form-submit navigation.
    Submit,
}

/// Named handlers the page can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    PageReady,
    SubmitRegistration,
}

/// One trigger-to-handler binding, registered at startup and alive for the
/// lifetime of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub trigger: Trigger,
    pub handler: Handler,
}

/// Which API round-trip a `PendingCall` belongs to, so the matching parse
/// and render can be applied when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    ListUsers,
    ListPurchases,
    Register,
}

/// A request the host still has to execute, tagged with the operation that
/// knows how to apply its response.
#[derive(Debug, Clone)]
pub struct PendingCall {
    pub kind: CallKind,
    pub request: HttpRequest,
}

/// The script's startup view of the document: which of the elements it
/// addresses exist on this particular page. The same wiring serves pages
/// that show only a subset of the views.
#[derive(Debug, Default)]
pub struct Page {
    /// Whether the registration form element exists.
    pub register_form: bool,
    /// Target for rendered user rows, when this page shows the user table.
    pub user_table_body: Option<Container>,
    /// Target for rendered purchase items, when this page shows the list.
    pub purchases_list: Option<Container>,
}

impl Page {
    /// Startup registration step: bind handlers to the triggers this page
    /// can fire. The submit binding exists only when the form does.
    pub fn wire(&self) -> Vec<Binding> {
        let mut bindings = vec![Binding {
            trigger: Trigger::PageReady,
            handler: Handler::PageReady,
        }];
        if self.register_form {
            bindings.push(Binding {
                trigger: Trigger::Submit,
                handler: Handler::SubmitRegistration,
            });
        }
        bindings
    }

    /// Page-load handler: one list call per container present. A page with
    /// neither container issues nothing.
    pub fn on_page_ready(&self, client: &DealsClient) -> Vec<PendingCall> {
        let mut calls = Vec::new();
        if self.user_table_body.is_some() {
            calls.push(PendingCall {
                kind: CallKind::ListUsers,
                request: client.build_list_users(),
            });
        }
        if self.purchases_list.is_some() {
            calls.push(PendingCall {
                kind: CallKind::ListPurchases,
                request: client.build_purchases_total(),
            });
        }
        calls
    }

    /// Submit handler: exactly one POST carrying the form's current values,
    /// empty strings included.
    pub fn submit_registration(
        &self,
        client: &DealsClient,
        form: &RegistrationForm,
    ) -> Result<PendingCall, ApiError> {
        Ok(PendingCall {
            kind: CallKind::Register,
            request: client.build_register(form)?,
        })
    }

    /// Apply one completed round-trip.
    ///
    /// List completions append into their container and yield `None`; a
    /// register completion yields `Some(message)` for the host to show as a
    /// blocking notification. A list completion whose container is absent is
    /// dropped quietly. Completions for concurrent calls may be applied in
    /// any order.
    pub fn complete(
        &mut self,
        client: &DealsClient,
        kind: CallKind,
        response: HttpResponse,
    ) -> Result<Option<String>, ApiError> {
        match kind {
            CallKind::ListUsers => {
                let users = client.parse_list_users(response)?;
                if let Some(container) = self.user_table_body.as_mut() {
                    render_user_rows(container, &users);
                }
                Ok(None)
            }
            CallKind::ListPurchases => {
                let purchases = client.parse_purchases_total(response)?;
                if let Some(container) = self.purchases_list.as_mut() {
                    render_purchase_items(container, &purchases);
                }
                Ok(None)
            }
            CallKind::Register => Ok(Some(client.parse_register(response)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> DealsClient {
        DealsClient::new("http://localhost:8000/api/v1/users")
    }

    fn users_body() -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"[{"username":"alice","user_email":"a@x.com","user_full_name":"Alice A","user_location":"NYC"}]"#
                .to_string(),
        }
    }

    fn purchases_body() -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"message":"Purchases to date.","purchases":[{"product_title":"Toaster","product_price":24.5}]}"#
                .to_string(),
        }
    }

    #[test]
    fn wire_binds_page_ready_always() {
        let page = Page::default();
        let bindings = page.wire();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].trigger, Trigger::PageReady);
        assert_eq!(bindings[0].handler, Handler::PageReady);
    }

    #[test]
    fn wire_binds_submit_only_when_form_present() {
        let page = Page {
            register_form: true,
            ..Page::default()
        };
        let bindings = page.wire();
        assert_eq!(bindings.len(), 2);
        assert!(bindings.contains(&Binding {
            trigger: Trigger::Submit,
            handler: Handler::SubmitRegistration,
        }));
    }

    #[test]
    fn page_ready_issues_nothing_without_containers() {
        let page = Page::default();
        assert!(page.on_page_ready(&client()).is_empty());
    }

    #[test]
    fn page_ready_issues_one_call_per_container() {
        let page = Page {
            register_form: false,
            user_table_body: Some(Container::new()),
            purchases_list: Some(Container::new()),
        };
        let calls = page.on_page_ready(&client());
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].kind, CallKind::ListUsers);
        assert_eq!(calls[1].kind, CallKind::ListPurchases);
    }

    #[test]
    fn page_ready_skips_absent_user_table() {
        let page = Page {
            register_form: false,
            user_table_body: None,
            purchases_list: Some(Container::new()),
        };
        let calls = page.on_page_ready(&client());
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].kind, CallKind::ListPurchases);
    }

    #[test]
    fn submit_produces_one_register_call() {
        let page = Page {
            register_form: true,
            ..Page::default()
        };
        let form = RegistrationForm {
            username: String::new(),
            password: String::new(),
            email: String::new(),
            full_name: String::new(),
            location: String::new(),
        };
        let call = page.submit_registration(&client(), &form).unwrap();
        assert_eq!(call.kind, CallKind::Register);
        assert!(call.request.path.ends_with("/register"));
        assert!(call.request.body.is_some());
    }

    #[test]
    fn complete_renders_users_into_container() {
        let mut page = Page {
            register_form: false,
            user_table_body: Some(Container::new()),
            purchases_list: None,
        };
        let outcome = page
            .complete(&client(), CallKind::ListUsers, users_body())
            .unwrap();
        assert!(outcome.is_none());
        assert_eq!(
            page.user_table_body.as_ref().unwrap().markup(),
            "<tr><td>alice</td><td>a@x.com</td><td>Alice A</td><td>NYC</td></tr>"
        );
    }

    #[test]
    fn completions_apply_in_any_order() {
        let mut page = Page {
            register_form: false,
            user_table_body: Some(Container::new()),
            purchases_list: Some(Container::new()),
        };
        // Purchases answer lands before the users answer.
        page.complete(&client(), CallKind::ListPurchases, purchases_body())
            .unwrap();
        page.complete(&client(), CallKind::ListUsers, users_body())
            .unwrap();
        assert!(page.purchases_list.as_ref().unwrap().markup().contains("Toaster"));
        assert!(page.user_table_body.as_ref().unwrap().markup().contains("alice"));
    }

    #[test]
    fn repeated_completions_append_again() {
        let mut page = Page {
            register_form: false,
            user_table_body: Some(Container::new()),
            purchases_list: None,
        };
        page.complete(&client(), CallKind::ListUsers, users_body()).unwrap();
        page.complete(&client(), CallKind::ListUsers, users_body()).unwrap();
        let markup = page.user_table_body.as_ref().unwrap().markup();
        assert_eq!(markup.matches("<tr>").count(), 2);
    }

    #[test]
    fn complete_without_container_drops_quietly() {
        let mut page = Page::default();
        let outcome = page
            .complete(&client(), CallKind::ListUsers, users_body())
            .unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn complete_register_yields_notification_message() {
        let mut page = Page {
            register_form: true,
            ..Page::default()
        };
        let response = HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: r#"{"message":"User 64f07c2a created"}"#.to_string(),
        };
        let outcome = page
            .complete(&client(), CallKind::Register, response)
            .unwrap();
        assert_eq!(outcome.as_deref(), Some("User 64f07c2a created"));
    }

    #[test]
    fn complete_propagates_parse_failure() {
        let mut page = Page {
            register_form: false,
            user_table_body: Some(Container::new()),
            purchases_list: None,
        };
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: r#"{"detail":"No users found."}"#.to_string(),
        };
        let err = page
            .complete(&client(), CallKind::ListUsers, response)
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
        // Nothing was rendered.
        assert_eq!(page.user_table_body.as_ref().unwrap().markup(), "");
    }
}
