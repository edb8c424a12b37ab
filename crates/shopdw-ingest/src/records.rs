//! Raw operational records as exported from the document store.
//!
//! Every field except the record identity is optional at the serde level.
//! Absence is tolerated here and resolved to sentinel values during
//! transformation, never rejected.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::extjson::{de_id, de_opt_datetime, de_opt_f64, de_opt_i64, de_opt_id};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    #[serde(rename = "_id", deserialize_with = "de_id")]
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    #[serde(rename = "createdAt", deserialize_with = "de_opt_datetime")]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    #[serde(rename = "_id", deserialize_with = "de_id")]
    pub id: String,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub price: Option<f64>,
    pub description: Option<String>,
    #[serde(rename = "countInStock", deserialize_with = "de_opt_i64")]
    pub count_in_stock: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShippingAddress {
    pub address: Option<String>,
    pub city: Option<String>,
    pub governorate: Option<String>,
    #[serde(rename = "postalCode")]
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderItem {
    #[serde(deserialize_with = "de_opt_id")]
    pub product: Option<String>,
    #[serde(deserialize_with = "de_opt_i64")]
    pub quantity: Option<i64>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderRecord {
    #[serde(rename = "_id", deserialize_with = "de_id")]
    pub id: String,
    #[serde(deserialize_with = "de_opt_id")]
    pub user: Option<String>,
    #[serde(rename = "createdAt", deserialize_with = "de_opt_datetime")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "shippingAddress")]
    pub shipping_address: Option<ShippingAddress>,
    #[serde(rename = "orderItems")]
    pub order_items: Vec<OrderItem>,
    #[serde(rename = "taxPrice", deserialize_with = "de_opt_f64")]
    pub tax_price: Option<f64>,
    #[serde(rename = "shippingPrice", deserialize_with = "de_opt_f64")]
    pub shipping_price: Option<f64>,
    #[serde(rename = "paymentMethod")]
    pub payment_method: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "isPaid")]
    pub is_paid: bool,
    #[serde(rename = "isDelivered")]
    pub is_delivered: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_tolerates_missing_fields() {
        let user: UserRecord = serde_json::from_str(r#"{"_id": "u1"}"#).expect("parse");
        assert_eq!(user.id, "u1");
        assert!(user.name.is_none());
        assert!(!user.is_admin);
    }

    #[test]
    fn user_accepts_extended_json() {
        let raw = r#"{
            "_id": {"$oid": "64f0c2"},
            "name": "Ahmed Ben Ali",
            "isAdmin": false,
            "createdAt": {"$date": {"$numberLong": "1736071800000"}}
        }"#;
        let user: UserRecord = serde_json::from_str(raw).expect("parse");
        assert_eq!(user.id, "64f0c2");
        assert_eq!(
            user.created_at.expect("created_at").date().to_string(),
            "2025-01-05"
        );
    }

    #[test]
    fn order_parses_nested_items_and_address() {
        let raw = r#"{
            "_id": "o1",
            "user": {"$oid": "u1"},
            "createdAt": "2025-01-05T10:30:00Z",
            "shippingAddress": {"city": "Sousse", "governorate": "Sousse", "postalCode": "4000", "country": "Tunisia"},
            "orderItems": [
                {"product": "p1", "quantity": 2, "price": 999},
                {"product": {"$oid": "p2"}, "price": "49.5"}
            ],
            "taxPrice": {"$numberDouble": "10.0"},
            "shippingPrice": 7,
            "paymentMethod": "Credit Card",
            "status": "Pending",
            "isPaid": true
        }"#;
        let order: OrderRecord = serde_json::from_str(raw).expect("parse");
        assert_eq!(order.order_items.len(), 2);
        assert_eq!(order.order_items[0].quantity, Some(2));
        assert_eq!(order.order_items[1].product.as_deref(), Some("p2"));
        assert_eq!(order.order_items[1].price, Some(49.5));
        assert_eq!(order.tax_price, Some(10.0));
        assert!(order.is_paid);
        assert!(!order.is_delivered);
    }
}
