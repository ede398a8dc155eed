//! User model and related payloads

use serde::{Deserialize, Serialize};

/// User entity
///
/// The stored password hash never leaves the service; it is skipped on
/// serialization.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Validated user registration payload
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub password: String,
}

/// Raw user registration request body, before boundary validation
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
    pub password: Option<String>,
}

/// Validated login credentials
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub user_name: String,
    pub password: String,
}

/// Raw login request body, before boundary validation
#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    pub user_name: Option<String>,
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_is_never_serialized() {
        let user = User {
            id: 1,
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            user_name: "alice".to_string(),
            password_hash: "$argon2id$...".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["user_name"], "alice");
    }
}
