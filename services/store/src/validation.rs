//! Request-body validation
//!
//! These checks run at the request boundary, before a repository operation
//! is invoked. Each function turns a raw payload into its validated form or
//! returns the message the client sees in a 400 response.

use crate::models::{
    LoginCredentials, LoginPayload, NewOrder, NewProduct, NewUser, OrderPayload, ProductPayload,
    UserPayload,
};

fn required_text(value: Option<String>, field: &str) -> Result<String, String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(format!("{field} is required")),
    }
}

/// Validate a registration payload
pub fn validate_new_user(payload: UserPayload) -> Result<NewUser, String> {
    Ok(NewUser {
        first_name: required_text(payload.first_name, "first_name")?,
        last_name: required_text(payload.last_name, "last_name")?,
        user_name: required_text(payload.user_name, "user_name")?,
        password: required_text(payload.password, "password")?,
    })
}

/// Validate a login payload
pub fn validate_credentials(payload: LoginPayload) -> Result<LoginCredentials, String> {
    Ok(LoginCredentials {
        user_name: required_text(payload.user_name, "user_name")?,
        password: required_text(payload.password, "password")?,
    })
}

/// Validate a product creation payload
pub fn validate_new_product(payload: ProductPayload) -> Result<NewProduct, String> {
    let name = required_text(payload.name, "name")?;

    let Some(price) = payload.price else {
        return Err("price is required".to_string());
    };
    if !price.is_finite() || price < 0.0 {
        return Err("price must be a non-negative number".to_string());
    }

    Ok(NewProduct {
        name,
        price,
        category: payload.category.filter(|c| !c.trim().is_empty()),
    })
}

/// Validate an order creation payload
pub fn validate_new_order(payload: OrderPayload) -> Result<NewOrder, String> {
    let Some(product_id) = payload.product_id else {
        return Err("product_id is required".to_string());
    };
    let Some(user_id) = payload.user_id else {
        return Err("user_id is required".to_string());
    };
    let Some(quantity) = payload.quantity else {
        return Err("quantity is required".to_string());
    };
    if quantity <= 0 {
        return Err("quantity must be a positive number".to_string());
    }

    Ok(NewOrder {
        product_id,
        user_id,
        quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_requires_every_field() {
        let payload = UserPayload {
            first_name: Some("Alice".to_string()),
            last_name: Some("Smith".to_string()),
            user_name: Some("alice".to_string()),
            password: None,
        };

        assert_eq!(
            validate_new_user(payload).unwrap_err(),
            "password is required"
        );
    }

    #[test]
    fn test_blank_fields_count_as_missing() {
        let payload = UserPayload {
            first_name: Some("   ".to_string()),
            last_name: Some("Smith".to_string()),
            user_name: Some("alice".to_string()),
            password: Some("pw".to_string()),
        };

        assert_eq!(
            validate_new_user(payload).unwrap_err(),
            "first_name is required"
        );
    }

    #[test]
    fn test_product_price_must_be_non_negative() {
        let payload = ProductPayload {
            name: Some("Laptop".to_string()),
            price: Some(-1.0),
            category: None,
        };

        assert_eq!(
            validate_new_product(payload).unwrap_err(),
            "price must be a non-negative number"
        );
    }

    #[test]
    fn test_product_empty_category_is_dropped() {
        let payload = ProductPayload {
            name: Some("Laptop".to_string()),
            price: Some(999.99),
            category: Some("".to_string()),
        };

        let product = validate_new_product(payload).unwrap();
        assert_eq!(product.category, None);
    }

    #[test]
    fn test_order_quantity_must_be_positive() {
        let payload = OrderPayload {
            product_id: Some(7),
            user_id: Some(3),
            quantity: Some(0),
        };

        assert_eq!(
            validate_new_order(payload).unwrap_err(),
            "quantity must be a positive number"
        );

        let payload = OrderPayload {
            product_id: Some(7),
            user_id: Some(3),
            quantity: Some(2),
        };
        let order = validate_new_order(payload).unwrap();
        assert_eq!(order.quantity, 2);
    }
}
