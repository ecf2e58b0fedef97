//! Modelo de FuelTransaction
//!
//! Este módulo contiene las cargas de combustible registradas por el usuario
//! y las estadísticas agregadas que calcula el backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Carga de combustible registrada
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct FuelTransaction {
    pub id: i64,
    pub user: i64,
    pub vehicle: Uuid,
    pub vehicle_name: String,
    pub station: Option<Uuid>,
    pub station_name: Option<String>,
    pub fuel_type: i64,
    pub fuel_type_name: String,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub quantity: f64,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub price_per_unit: f64,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub total_amount: f64,

    #[validate(range(min = 1))]
    pub odometer_reading: Option<i64>,

    pub transaction_date: DateTime<Utc>,
}

/// Agregado mensual dentro de las estadísticas
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct MonthlyFuelStats {
    pub month: String,
    pub total_quantity: f64,
    pub total_amount: f64,
    pub avg_price: f64,
}

/// Estadísticas de consumo calculadas por el backend
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct TransactionStats {
    pub monthly_data: Vec<MonthlyFuelStats>,
    pub total_transactions: i64,
    pub total_spent: f64,
    pub total_liters: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::parse_entity;
    use serde_json::json;

    fn transaction_json() -> serde_json::Value {
        json!({
            "id": 101,
            "user": 7,
            "vehicle": "0a8ab20d-5c88-4d0e-8e5e-30327cde1333",
            "vehicle_name": "Bakkie",
            "station": "77b5e3d0-96b2-4d46-a2f9-bb64a1c60a11",
            "station_name": "Shell Brooklyn",
            "fuel_type": 2,
            "fuel_type_name": "Diesel",
            "quantity": 52.3,
            "price_per_unit": 21.87,
            "total_amount": 1143.80,
            "odometer_reading": 84210,
            "transaction_date": "2024-05-02T17:20:00Z"
        })
    }

    #[test]
    fn test_transaction_parses_from_api_json() {
        let tx: FuelTransaction = parse_entity("FuelTransaction", transaction_json()).unwrap();
        assert_eq!(tx.vehicle_name, "Bakkie");
        assert_eq!(tx.odometer_reading, Some(84210));
    }

    #[test]
    fn test_transaction_allows_null_station() {
        let mut raw = transaction_json();
        raw["station"] = json!(null);
        raw["station_name"] = json!(null);

        let tx: FuelTransaction = parse_entity("FuelTransaction", raw).unwrap();
        assert_eq!(tx.station, None);
    }

    #[test]
    fn test_transaction_rejects_zero_quantity() {
        let mut raw = transaction_json();
        raw["quantity"] = json!(0.0);

        let err = parse_entity::<FuelTransaction>("FuelTransaction", raw).unwrap_err();
        assert!(err.to_string().contains("quantity"), "error was: {}", err);
    }

    #[test]
    fn test_transaction_rejects_non_positive_odometer() {
        let mut raw = transaction_json();
        raw["odometer_reading"] = json!(0);

        let err = parse_entity::<FuelTransaction>("FuelTransaction", raw).unwrap_err();
        assert!(err.to_string().contains("odometer_reading"), "error was: {}", err);
    }

    #[test]
    fn test_stats_parse_from_api_json() {
        let raw = json!({
            "monthly_data": [
                { "month": "2024-04", "total_quantity": 98.5, "total_amount": 2154.2, "avg_price": 21.87 }
            ],
            "total_transactions": 14,
            "total_spent": 15230.50,
            "total_liters": 698.4
        });

        let stats: TransactionStats = parse_entity("TransactionStats", raw).unwrap();
        assert_eq!(stats.monthly_data.len(), 1);
        assert_eq!(stats.total_transactions, 14);
    }
}
