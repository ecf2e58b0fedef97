use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::fuel::FuelTypeCode;

// Login request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

// Login response: el token opaco emitido por el backend
#[derive(Debug, Clone, Deserialize, Validate, PartialEq)]
pub struct LoginResponse {
    #[validate(length(min = 1))]
    pub token: String,
}

// Registro de cuenta nueva
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 150))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8))]
    pub password: String,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_fuel_type: Option<FuelTypeCode>,
}

// Verificación del OTP de activación enviado por email
#[derive(Debug, Clone, Serialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 4, max = 8))]
    pub otp: String,
}

// Acuse `{message}` de registro y verificación
#[derive(Debug, Clone, Deserialize, Validate, PartialEq)]
pub struct AuthMessage {
    pub message: String,
}
