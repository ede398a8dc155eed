//! Storefront service models

pub mod order;
pub mod product;
pub mod user;

// Re-export for convenience
pub use order::{NewOrder, Order, OrderPayload, OrderStatus};
pub use product::{NewProduct, Product, ProductPayload};
pub use user::{LoginCredentials, LoginPayload, NewUser, User, UserPayload};
