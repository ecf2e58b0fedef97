//! Modelos de combustible
//!
//! Este módulo contiene el catálogo de tipos de combustible y los precios
//! reportados por estación.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Código de tipo de combustible - mapea al ENUM del backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FuelTypeCode {
    #[serde(rename = "PETROL_95")]
    Petrol95,
    #[serde(rename = "PETROL_98")]
    Petrol98,
    #[serde(rename = "DIESEL")]
    Diesel,
    #[serde(rename = "ELECTRIC")]
    Electric,
    #[serde(rename = "HYBRID")]
    Hybrid,
    #[serde(rename = "LPG")]
    Lpg,
}

impl FuelTypeCode {
    /// Representación exacta que espera el backend en querys y bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelTypeCode::Petrol95 => "PETROL_95",
            FuelTypeCode::Petrol98 => "PETROL_98",
            FuelTypeCode::Diesel => "DIESEL",
            FuelTypeCode::Electric => "ELECTRIC",
            FuelTypeCode::Hybrid => "HYBRID",
            FuelTypeCode::Lpg => "LPG",
        }
    }
}

/// Tipo de combustible del catálogo del backend
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct FuelType {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Precio reportado para un combustible en una estación
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct FuelPrice {
    pub id: i64,
    pub station: Uuid,
    pub station_name: String,
    pub fuel_type: i64,
    pub fuel_type_name: String,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub price: f64,

    /// PK del usuario que reportó el precio, null en precios de sistema
    pub reported_by: Option<i64>,
    pub is_verified: bool,
    pub reported_at: DateTime<Utc>,
}
