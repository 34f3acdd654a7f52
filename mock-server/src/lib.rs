use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Stored user profile. The password from the registration payload is
/// dropped at the door and never serialized back out.
#[derive(Clone, Debug, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub user_email: String,
    pub user_full_name: String,
    pub user_location: String,
}

#[derive(Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
    pub user_email: String,
    pub user_full_name: String,
    pub user_location: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Purchase {
    pub deal_id: String,
    pub product_title: String,
    pub product_price: f64,
}

/// A deal the add-purchase route can resolve, standing in for the posts
/// collection of the real API.
#[derive(Clone, Debug)]
pub struct Product {
    pub title: String,
    pub price: f64,
}

#[derive(Default)]
pub struct Store {
    pub users: Vec<User>,
    pub purchases: Vec<Purchase>,
    pub spent_total: f64,
    pub catalog: HashMap<String, Product>,
}

pub type Db = Arc<RwLock<Store>>;

fn seed_catalog() -> HashMap<String, Product> {
    HashMap::from([
        (
            "deal-001".to_string(),
            Product {
                title: "Wireless Headphones".to_string(),
                price: 59.99,
            },
        ),
        (
            "deal-002".to_string(),
            Product {
                title: "Mechanical Keyboard".to_string(),
                price: 120.0,
            },
        ),
    ])
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store {
        catalog: seed_catalog(),
        ..Store::default()
    }));
    Router::new()
        .route("/", get(list_users))
        .route("/register", post(register_user))
        .route("/purchases/total", get(purchases_total))
        .route("/purchases/{deal_id}/add", post(add_purchase))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn register_user(
    State(db): State<Db>,
    Json(input): Json<RegisterUser>,
) -> (StatusCode, Json<Value>) {
    let mut store = db.write().await;
    if store.users.iter().any(|u| u.username == input.username) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "message": "Username already registered. Please select another username."
            })),
        );
    }
    let user = User {
        id: Uuid::new_v4(),
        username: input.username,
        user_email: input.user_email,
        user_full_name: input.user_full_name,
        user_location: input.user_location,
    };
    let message = format!("User {} created", user.id);
    store.users.push(user);
    (StatusCode::CREATED, Json(json!({ "message": message })))
}

async fn list_users(
    State(db): State<Db>,
) -> Result<Json<Vec<User>>, (StatusCode, Json<Value>)> {
    let store = db.read().await;
    if store.users.is_empty() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "No users found." })),
        ));
    }
    Ok(Json(store.users.clone()))
}

async fn purchases_total(State(db): State<Db>) -> Json<Value> {
    let store = db.read().await;
    Json(json!({
        "message": "Purchases to date.",
        "purchases": store.purchases,
    }))
}

async fn add_purchase(
    State(db): State<Db>,
    Path(deal_id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut store = db.write().await;
    let product = store.catalog.get(&deal_id).cloned().ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": format!("Product {deal_id} not found.") })),
        )
    })?;
    store.spent_total += product.price;
    let total = store.spent_total;
    let message = format!(
        "Added ${} to purchases. Total spent: ${}",
        product.price, total
    );
    store.purchases.push(Purchase {
        deal_id,
        product_title: product.title,
        product_price: product.price,
    });
    Ok(Json(json!({ "message": message })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_with_wire_keys() {
        let user = User {
            id: Uuid::nil(),
            username: "alice".to_string(),
            user_email: "a@x.com".to_string(),
            user_full_name: "Alice A".to_string(),
            user_location: "NYC".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["username"], "alice");
        assert_eq!(json["user_email"], "a@x.com");
        assert_eq!(json["user_full_name"], "Alice A");
        assert_eq!(json["user_location"], "NYC");
    }

    #[test]
    fn register_user_requires_all_fields() {
        let result: Result<RegisterUser, _> =
            serde_json::from_str(r#"{"username":"alice","password":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn register_user_accepts_empty_strings() {
        let input: RegisterUser = serde_json::from_str(
            r#"{"username":"","password":"","user_email":"","user_full_name":"","user_location":""}"#,
        )
        .unwrap();
        assert!(input.username.is_empty());
        assert!(input.user_location.is_empty());
    }

    #[test]
    fn purchase_roundtrips_through_json() {
        let purchase = Purchase {
            deal_id: "deal-001".to_string(),
            product_title: "Wireless Headphones".to_string(),
            product_price: 59.99,
        };
        let json = serde_json::to_string(&purchase).unwrap();
        let back: Purchase = serde_json::from_str(&json).unwrap();
        assert_eq!(back.product_title, purchase.product_title);
        assert_eq!(back.product_price, purchase.product_price);
    }

    #[test]
    fn catalog_seeds_known_deals() {
        let catalog = seed_catalog();
        assert_eq!(catalog["deal-001"].price, 59.99);
        assert_eq!(catalog["deal-002"].title, "Mechanical Keyboard");
    }
}
