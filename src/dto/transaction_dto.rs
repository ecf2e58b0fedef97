use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

// Registro de una carga de combustible
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateTransactionRequest {
    pub vehicle: Uuid,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<Uuid>,

    pub fuel_type: i64,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub quantity: f64,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub price_per_unit: f64,

    #[validate(custom = "crate::utils::validation::validate_positive_quantity")]
    pub total_amount: f64,

    #[validate(range(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odometer_reading: Option<i64>,

    pub transaction_date: DateTime<Utc>,
}
