use serde::Serialize;
use validator::Validate;

use crate::models::fuel::FuelTypeCode;

/// Radio de búsqueda por defecto, en km
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 5.0;

/// Parámetros de la búsqueda de estaciones por cercanía
#[derive(Debug, Clone, Validate)]
pub struct NearbyStationsQuery {
    #[validate(custom = "crate::utils::validation::validate_latitude")]
    pub latitude: f64,

    #[validate(custom = "crate::utils::validation::validate_longitude")]
    pub longitude: f64,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub radius: f64,

    pub fuel_type: Option<FuelTypeCode>,
}

impl NearbyStationsQuery {
    /// Búsqueda alrededor de un punto con el radio por defecto
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius: DEFAULT_SEARCH_RADIUS_KM,
            fuel_type: None,
        }
    }

    /// Parámetros de query tal como los espera el backend
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("lat", self.latitude.to_string()),
            ("lng", self.longitude.to_string()),
            ("radius", self.radius.to_string()),
        ];
        if let Some(fuel_type) = self.fuel_type {
            params.push(("fuel_type", fuel_type.as_str().to_string()));
        }
        params
    }
}

// Request para alternar una estación favorita
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct ToggleFavoriteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
