//! Product model and related payloads

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub category: Option<String>,
}

/// Validated product creation payload
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: Option<String>,
}

/// Raw product creation request body, before boundary validation
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}
