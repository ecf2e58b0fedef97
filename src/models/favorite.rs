//! Modelo de Favorite
//!
//! Este módulo contiene las estaciones favoritas del usuario con el resumen
//! de estación embebido que devuelve el backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::station::PetrolStationSummary;

/// Estación marcada como favorita
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Favorite {
    pub id: i64,
    pub user: i64,
    pub station: Uuid,

    #[validate]
    pub station_detail: PetrolStationSummary,

    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Acuse del backend al alternar una estación favorita
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct FavoriteToggle {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::parse_entity;
    use serde_json::json;

    #[test]
    fn test_favorite_validates_embedded_station() {
        let raw = json!({
            "id": 5,
            "user": 7,
            "station": "77b5e3d0-96b2-4d46-a2f9-bb64a1c60a11",
            "station_detail": {
                "id": "77b5e3d0-96b2-4d46-a2f9-bb64a1c60a11",
                "name": "Shell Brooklyn",
                "company": 1,
                "company_name": "Shell",
                "company_logo": null,
                "address": "271 Bronkhorst St",
                "city": "Pretoria",
                "latitude": -25.7687,
                "longitude": 28.2295,
                "is_24h": true,
                "is_active": true,
                "average_rating": 8.0
            },
            "notes": "cheapest diesel nearby",
            "created_at": "2024-02-01T10:00:00Z"
        });

        let err = parse_entity::<Favorite>("Favorite", raw).unwrap_err();
        let detail = err.to_string();
        assert!(detail.contains("station_detail.average_rating"), "error was: {}", detail);
    }
}
