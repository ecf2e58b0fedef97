//! Modelo de Vehicle
//!
//! Este módulo contiene el vehículo registrado por el usuario, con su tipo
//! de combustible y capacidades usadas para planear viajes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::fuel::FuelTypeCode;

/// Vehículo del usuario tal como lo expone el backend
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Vehicle {
    pub id: Uuid,
    pub user: i64,
    pub name: String,
    pub make: String,
    pub model: String,

    #[validate(range(min = 1))]
    pub year: i32,

    pub fuel_type: FuelTypeCode,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub tank_capacity: f64,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub avg_consumption: f64,

    pub license_plate: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
