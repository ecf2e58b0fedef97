//! Modelo de TripPlan
//!
//! Este módulo contiene los planes de viaje con sus paradas de recarga.
//! El orden de las paradas debe ser positivo y estrictamente creciente
//! dentro de un plan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::station::PetrolStationSummary;

/// Parada de recarga calculada dentro de un plan de viaje
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct RefuelStop {
    pub id: i64,
    pub trip_plan: i64,
    pub station: Uuid,

    #[validate]
    pub station_detail: PetrolStationSummary,

    pub distance_from_start: f64,
    pub estimated_fuel_level: f64,

    #[validate(range(min = 1))]
    pub order: i32,
}

/// Plan de viaje con origen, destino y paradas opcionales
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[validate(schema(function = "validate_refuel_stop_order"))]
pub struct TripPlan {
    pub id: i64,
    pub user: i64,
    pub vehicle: Uuid,
    pub vehicle_name: String,
    pub start_address: String,

    #[validate(custom = "crate::utils::validation::validate_latitude")]
    pub start_latitude: f64,

    #[validate(custom = "crate::utils::validation::validate_longitude")]
    pub start_longitude: f64,

    pub destination_address: String,

    #[validate(custom = "crate::utils::validation::validate_latitude")]
    pub destination_latitude: f64,

    #[validate(custom = "crate::utils::validation::validate_longitude")]
    pub destination_longitude: f64,

    pub total_distance: f64,
    pub created_at: DateTime<Utc>,

    #[validate]
    pub refuel_stops: Option<Vec<RefuelStop>>,
}

/// Respuesta del cálculo de paradas; `stops` llega vacío cuando el viaje
/// no necesita recargas
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct TripStopsResult {
    pub message: String,

    #[validate]
    #[serde(default)]
    pub stops: Vec<RefuelStop>,
}

fn validate_refuel_stop_order(plan: &TripPlan) -> Result<(), ValidationError> {
    if let Some(stops) = &plan.refuel_stops {
        for pair in stops.windows(2) {
            if pair[1].order <= pair[0].order {
                let mut error = ValidationError::new("refuel_stop_order");
                error.add_param("previous".into(), &pair[0].order);
                error.add_param("next".into(), &pair[1].order);
                return Err(error);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::parse_entity;
    use serde_json::json;

    fn station_detail_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": "Total Midrand",
            "company": 2,
            "company_name": "Total",
            "company_logo": null,
            "address": "1 Old Pretoria Rd",
            "city": "Midrand",
            "latitude": -25.989,
            "longitude": 28.128,
            "is_24h": true,
            "is_active": true,
            "average_rating": null
        })
    }

    fn stop_json(order: i32) -> serde_json::Value {
        json!({
            "id": order,
            "trip_plan": 4,
            "station": "8e46b4a1-41c8-4e9e-9b6d-2a3f7a9f2a01",
            "station_detail": station_detail_json("8e46b4a1-41c8-4e9e-9b6d-2a3f7a9f2a01"),
            "distance_from_start": 120.0 * order as f64,
            "estimated_fuel_level": 22.0,
            "order": order
        })
    }

    fn trip_json(orders: &[i32]) -> serde_json::Value {
        json!({
            "id": 4,
            "user": 7,
            "vehicle": "0a8ab20d-5c88-4d0e-8e5e-30327cde1333",
            "vehicle_name": "Bakkie",
            "start_address": "Pretoria CBD",
            "start_latitude": -25.7479,
            "start_longitude": 28.2293,
            "destination_address": "Durban Beachfront",
            "destination_latitude": -29.8587,
            "destination_longitude": 31.0218,
            "total_distance": 635.0,
            "created_at": "2024-05-01T06:00:00Z",
            "refuel_stops": orders.iter().map(|o| stop_json(*o)).collect::<Vec<_>>()
        })
    }

    #[test]
    fn test_trip_parses_with_increasing_stop_order() {
        let trip: TripPlan = parse_entity("TripPlan", trip_json(&[1, 2, 3])).unwrap();
        assert_eq!(trip.refuel_stops.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn test_trip_parses_without_stops() {
        let mut raw = trip_json(&[]);
        raw.as_object_mut().unwrap().remove("refuel_stops");

        let trip: TripPlan = parse_entity("TripPlan", raw).unwrap();
        assert!(trip.refuel_stops.is_none());
    }

    #[test]
    fn test_trip_rejects_duplicate_stop_order() {
        let err = parse_entity::<TripPlan>("TripPlan", trip_json(&[1, 2, 2])).unwrap_err();
        assert!(err.to_string().contains("refuel_stop_order"), "error was: {}", err);
    }

    #[test]
    fn test_trip_rejects_decreasing_stop_order() {
        assert!(parse_entity::<TripPlan>("TripPlan", trip_json(&[2, 1])).is_err());
    }

    #[test]
    fn test_trip_rejects_non_positive_stop_order() {
        let err = parse_entity::<TripPlan>("TripPlan", trip_json(&[0, 1])).unwrap_err();
        assert!(err.to_string().contains("order"), "error was: {}", err);
    }

    #[test]
    fn test_stops_result_defaults_to_empty() {
        let raw = json!({ "message": "No refueling stops needed" });
        let result: TripStopsResult = parse_entity("TripStopsResult", raw).unwrap();
        assert!(result.stops.is_empty());
    }
}
