//! Modelo de User
//!
//! Este módulo contiene el perfil de usuario tal como lo expone el backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Perfil del usuario autenticado
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,

    #[validate(email)]
    pub email: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub profile_picture: Option<String>,
    pub preferred_fuel_type: Option<String>,
    pub date_joined: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::parse_entity;
    use serde_json::json;

    #[test]
    fn test_user_parses_with_nullable_fields() {
        let raw = json!({
            "id": 7,
            "username": "lerato",
            "email": "lerato@example.com",
            "first_name": "Lerato",
            "last_name": null,
            "phone_number": null,
            "profile_picture": null,
            "preferred_fuel_type": "PETROL_95",
            "date_joined": "2023-11-20T09:00:00Z"
        });

        let user: User = parse_entity("User", raw).unwrap();
        assert_eq!(user.username, "lerato");
        assert_eq!(user.last_name, None);
    }

    #[test]
    fn test_user_requires_username() {
        let raw = json!({
            "id": 7,
            "email": "lerato@example.com",
            "date_joined": "2023-11-20T09:00:00Z"
        });

        let err = parse_entity::<User>("User", raw).unwrap_err();
        assert!(err.to_string().contains("username"), "error was: {}", err);
    }

    #[test]
    fn test_user_rejects_invalid_timestamp() {
        let raw = json!({
            "id": 7,
            "username": "lerato",
            "email": "lerato@example.com",
            "date_joined": "20/11/2023"
        });

        assert!(parse_entity::<User>("User", raw).is_err());
    }
}
