use serde::Serialize;
use validator::Validate;

// Nueva alerta de precio con su geocerca
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreatePriceAlertRequest {
    pub fuel_type: i64,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub target_price: f64,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub location_radius: f64,

    #[validate(custom = "crate::utils::validation::validate_latitude")]
    pub location_lat: f64,

    #[validate(custom = "crate::utils::validation::validate_longitude")]
    pub location_lng: f64,
}

// Actualización parcial de una alerta; solo los campos presentes viajan
// en el PATCH
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdatePriceAlertRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<i64>,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_price: Option<f64>,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_radius: Option<f64>,

    #[validate(custom = "crate::utils::validation::validate_latitude")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_lat: Option<f64>,

    #[validate(custom = "crate::utils::validation::validate_longitude")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_lng: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
