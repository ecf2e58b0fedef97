use serde::Serialize;
use validator::Validate;

use crate::models::fuel::FuelTypeCode;

// Request para crear un vehículo
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    pub fuel_type: FuelTypeCode,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub tank_capacity: f64,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub avg_consumption: f64,

    #[validate(custom = "crate::utils::validation::validate_license_plate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
}

// Request para actualizar un vehículo; solo los campos presentes viajan
// en el PATCH
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<FuelTypeCode>,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tank_capacity: Option<f64>,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_consumption: Option<f64>,

    #[validate(custom = "crate::utils::validation::validate_license_plate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
}
