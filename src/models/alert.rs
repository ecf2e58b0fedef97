//! Modelo de PriceAlert
//!
//! Este módulo contiene las alertas de precio con su geocerca asociada.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Alerta de precio sobre un tipo de combustible dentro de una geocerca
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct PriceAlert {
    pub id: i64,
    pub user: i64,
    pub fuel_type: i64,
    pub fuel_type_name: String,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub target_price: f64,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub location_radius: f64,

    #[validate(custom = "crate::utils::validation::validate_latitude")]
    pub location_lat: f64,

    #[validate(custom = "crate::utils::validation::validate_longitude")]
    pub location_lng: f64,

    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
