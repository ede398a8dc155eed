//! Order model and related payloads

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Order lifecycle status
///
/// The only transition is `Active` to `Complete`; `Complete` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Active,
    Complete,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Active => "active",
            OrderStatus::Complete => "complete",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(OrderStatus::Active),
            "complete" => Ok(OrderStatus::Complete),
            other => Err(format!("unknown order status '{other}'")),
        }
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: i32,
    pub product_id: i32,
    pub user_id: i32,
    pub quantity: i32,
    pub status: OrderStatus,
}

/// Validated order creation payload
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub product_id: i32,
    pub user_id: i32,
    pub quantity: i32,
}

/// Raw order creation request body, before boundary validation
#[derive(Debug, Clone, Deserialize)]
pub struct OrderPayload {
    pub product_id: Option<i32>,
    pub user_id: Option<i32>,
    pub quantity: Option<i32>,
}
