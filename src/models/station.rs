//! Modelos de PetrolStation
//!
//! Este módulo contiene las dos formas de estación que expone el backend:
//! el resumen usado en listados/cercanía y el detalle completo con
//! amenidades, precios vigentes y tráfico.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

use crate::models::company::FuelCompany;

/// Amenidad de una estación (tienda, lavado, baños, ...)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct StationAmenity {
    pub id: i64,
    pub station: Uuid,
    pub amenity_type: String,
    pub amenity_type_display: String,
    pub is_operational: bool,
    pub details: Option<String>,
}

/// Precio vigente de un combustible en la estación
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct CurrentPrice {
    pub fuel_type_id: i64,
    pub fuel_type_name: String,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub price: f64,

    pub reported_at: DateTime<Utc>,
}

/// Snapshot de tráfico reportado en la estación
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct CurrentTraffic {
    pub current_visitors: i64,
    pub queue_length: i64,
    pub estimated_wait_time: f64,
    pub timestamp: DateTime<Utc>,
}

/// Resumen de estación para listados y búsqueda por cercanía
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct PetrolStationSummary {
    pub id: Uuid,
    pub name: String,
    pub company: i64,
    pub company_name: String,
    pub company_logo: Option<String>,
    pub address: String,
    pub city: String,

    #[validate(custom = "crate::utils::validation::validate_latitude")]
    pub latitude: f64,

    #[validate(custom = "crate::utils::validation::validate_longitude")]
    pub longitude: f64,

    pub is_24h: bool,
    pub is_active: bool,

    #[validate(range(min = 1, max = 5))]
    pub average_rating: Option<f64>,

    /// Distancia en km al punto consultado; solo presente en búsquedas
    pub distance: Option<f64>,
}

/// Detalle completo de una estación
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct PetrolStationDetail {
    pub id: Uuid,
    pub name: String,
    pub company: FuelCompany,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,

    #[validate(custom = "crate::utils::validation::validate_latitude")]
    pub latitude: f64,

    #[validate(custom = "crate::utils::validation::validate_longitude")]
    pub longitude: f64,

    pub phone_number: Option<String>,
    pub website: Option<String>,
    pub opening_hours: HashMap<String, Value>,
    pub is_24h: bool,
    pub is_active: bool,
    pub amenities: Vec<StationAmenity>,

    #[validate]
    pub current_prices: Vec<CurrentPrice>,

    #[validate(range(min = 1, max = 5))]
    pub average_rating: Option<f64>,

    pub reviews_count: i64,
    pub current_traffic: Option<CurrentTraffic>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::{parse_entity, parse_entity_list};
    use serde_json::json;

    fn summary_json() -> Value {
        json!({
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
            "average_rating": 4.3,
            "distance": 1.8
        })
    }

    fn detail_json() -> Value {
        json!({
            "id": "77b5e3d0-96b2-4d46-a2f9-bb64a1c60a11",
            "name": "Shell Brooklyn",
            "company": {
                "id": 1,
                "name": "Shell",
                "logo": null,
                "website": "https://shell.co.za",
                "description": null
            },
            "address": "271 Bronkhorst St",
            "city": "Pretoria",
            "state": "Gauteng",
            "postal_code": "0181",
            "country": "South Africa",
            "latitude": -25.7687,
            "longitude": 28.2295,
            "phone_number": "+27 12 346 1182",
            "website": null,
            "opening_hours": { "mon_fri": "06:00-22:00", "sat": "07:00-21:00" },
            "is_24h": false,
            "is_active": true,
            "amenities": [
                {
                    "id": 9,
                    "station": "77b5e3d0-96b2-4d46-a2f9-bb64a1c60a11",
                    "amenity_type": "CAR_WASH",
                    "amenity_type_display": "Car wash",
                    "is_operational": true,
                    "details": null
                }
            ],
            "current_prices": [
                {
                    "fuel_type_id": 1,
                    "fuel_type_name": "Petrol 95",
                    "price": 23.46,
                    "reported_at": "2024-05-02T08:15:00Z"
                }
            ],
            "average_rating": 4.3,
            "reviews_count": 12,
            "current_traffic": null
        })
    }

    #[test]
    fn test_summary_parses_from_api_json() {
        let station: PetrolStationSummary =
            parse_entity("PetrolStationSummary", summary_json()).unwrap();
        assert_eq!(station.city, "Pretoria");
        assert_eq!(station.distance, Some(1.8));
    }

    #[test]
    fn test_summary_allows_null_rating_and_missing_distance() {
        let mut raw = summary_json();
        raw["average_rating"] = json!(null);
        raw.as_object_mut().unwrap().remove("distance");

        let station: PetrolStationSummary =
            parse_entity("PetrolStationSummary", raw).unwrap();
        assert_eq!(station.average_rating, None);
        assert_eq!(station.distance, None);
    }

    #[test]
    fn test_summary_rejects_rating_out_of_range() {
        let mut raw = summary_json();
        raw["average_rating"] = json!(5.7);

        let err = parse_entity::<PetrolStationSummary>("PetrolStationSummary", raw).unwrap_err();
        assert!(err.to_string().contains("average_rating"), "error was: {}", err);
    }

    #[test]
    fn test_summary_rejects_out_of_bounds_coordinates() {
        let mut raw = summary_json();
        raw["latitude"] = json!(-95.2);

        let err = parse_entity::<PetrolStationSummary>("PetrolStationSummary", raw).unwrap_err();
        assert!(err.to_string().contains("latitude"), "error was: {}", err);
    }

    #[test]
    fn test_detail_parses_with_nested_structures() {
        let detail: PetrolStationDetail =
            parse_entity("PetrolStationDetail", detail_json()).unwrap();
        assert_eq!(detail.company.name, "Shell");
        assert_eq!(detail.amenities.len(), 1);
        assert_eq!(detail.current_traffic, None);
    }

    #[test]
    fn test_detail_rejects_bad_nested_price() {
        let mut raw = detail_json();
        raw["current_prices"][0]["price"] = json!(-3.0);

        let err = parse_entity::<PetrolStationDetail>("PetrolStationDetail", raw).unwrap_err();
        let detail = err.to_string();
        assert!(detail.contains("current_prices[0].price"), "error was: {}", detail);
    }

    #[test]
    fn test_summary_list_preserves_server_order() {
        let mut second = summary_json();
        second["id"] = json!("99042c2d-7e1c-4a2f-b1d4-5a8f00e5a0c2");
        second["name"] = json!("Engen Hatfield");

        let raw = json!([summary_json(), second]);
        let stations: Vec<PetrolStationSummary> =
            parse_entity_list("PetrolStationSummary", raw).unwrap();

        assert_eq!(stations[0].name, "Shell Brooklyn");
        assert_eq!(stations[1].name, "Engen Hatfield");
    }
}
