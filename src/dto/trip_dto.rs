use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

// Nuevo plan de viaje; las paradas las calcula el backend después
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateTripPlanRequest {
    pub vehicle: Uuid,

    #[validate(length(min = 1, max = 255))]
    pub start_address: String,

    #[validate(custom = "crate::utils::validation::validate_latitude")]
    pub start_latitude: f64,

    #[validate(custom = "crate::utils::validation::validate_longitude")]
    pub start_longitude: f64,

    #[validate(length(min = 1, max = 255))]
    pub destination_address: String,

    #[validate(custom = "crate::utils::validation::validate_latitude")]
    pub destination_latitude: f64,

    #[validate(custom = "crate::utils::validation::validate_longitude")]
    pub destination_longitude: f64,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub total_distance: f64,
}
