//! Modelo de Review
//!
//! Este módulo contiene las reseñas de estaciones con su calificación
//! principal y las sub-calificaciones opcionales, todas acotadas a [1, 5].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Imagen adjunta a una reseña
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ReviewImage {
    pub id: i64,
    pub image: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Reseña de una estación
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Review {
    pub id: i64,
    pub user: i64,
    pub user_username: String,
    pub station: Uuid,
    pub station_name: String,

    #[validate(range(min = 1, max = 5))]
    pub rating: i32,

    pub comment: String,

    #[validate(range(min = 1, max = 5))]
    pub service_rating: Option<i32>,

    #[validate(range(min = 1, max = 5))]
    pub cleanliness_rating: Option<i32>,

    #[validate(range(min = 1, max = 5))]
    pub price_rating: Option<i32>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(default)]
    pub images: Vec<ReviewImage>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::parse_entity;
    use serde_json::json;

    fn review_json() -> serde_json::Value {
        json!({
            "id": 31,
            "user": 7,
            "user_username": "lerato",
            "station": "77b5e3d0-96b2-4d46-a2f9-bb64a1c60a11",
            "station_name": "Shell Brooklyn",
            "rating": 4,
            "comment": "Quick service, clean forecourt",
            "service_rating": 5,
            "cleanliness_rating": null,
            "price_rating": 3,
            "created_at": "2024-04-18T14:02:00Z",
            "updated_at": "2024-04-18T14:02:00Z",
            "images": []
        })
    }

    #[test]
    fn test_review_parses_from_api_json() {
        let review: Review = parse_entity("Review", review_json()).unwrap();
        assert_eq!(review.rating, 4);
        assert_eq!(review.cleanliness_rating, None);
    }

    #[test]
    fn test_review_rejects_rating_above_five() {
        let mut raw = review_json();
        raw["rating"] = json!(6);

        let err = parse_entity::<Review>("Review", raw).unwrap_err();
        let detail = err.to_string();
        assert!(detail.contains("rating"), "error was: {}", detail);
        assert!(detail.contains("range"), "error was: {}", detail);
    }

    #[test]
    fn test_review_rejects_zero_sub_rating() {
        let mut raw = review_json();
        raw["service_rating"] = json!(0);

        let err = parse_entity::<Review>("Review", raw).unwrap_err();
        assert!(err.to_string().contains("service_rating"), "error was: {}", err);
    }

    #[test]
    fn test_review_parses_without_images_field() {
        let mut raw = review_json();
        raw.as_object_mut().unwrap().remove("images");

        let review: Review = parse_entity("Review", raw).unwrap();
        assert!(review.images.is_empty());
    }
}
