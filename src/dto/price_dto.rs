use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

// Reporte de un precio observado en una estación
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ReportPriceRequest {
    pub station: Uuid,
    pub fuel_type: i64,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub price: f64,
}
