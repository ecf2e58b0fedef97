//! Operaciones de autenticación
//!
//! Este módulo maneja el login por token, el registro con activación por
//! OTP y el cierre de sesión local.

use reqwest::Method;

use super::{validated_body, PetrolFinderApi};
use crate::dto::auth_dto::{
    AuthMessage, LoginRequest, LoginResponse, RegisterRequest, VerifyOtpRequest,
};
use crate::utils::errors::ApiResult;
use crate::utils::validation::parse_entity;

impl PetrolFinderApi {
    /// Iniciar sesión: el backend emite un token opaco que queda guardado
    /// en el store de sesión para los requests siguientes
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let body = validated_body("LoginRequest", &request)?;

        let raw = self
            .client
            .request(Method::POST, "auth/token/", None, Some(&body))
            .await?;
        let response: LoginResponse = parse_entity("LoginResponse", raw)?;

        self.client.session().set_token(response.token.clone()).await;
        log::info!("🔓 Sesión iniciada para '{}'", username);
        Ok(response)
    }

    /// Cerrar la sesión local. No hay llamada de red: el backend no expone
    /// revocación y el token simplemente deja de adjuntarse.
    pub async fn logout(&self) {
        self.client.session().clear().await;
    }

    /// Registrar una cuenta nueva; el backend responde con un mensaje y
    /// envía el OTP de activación por email
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthMessage> {
        let body = validated_body("RegisterRequest", request)?;
        let raw = self
            .client
            .request(Method::POST, "auth/register/", None, Some(&body))
            .await?;
        parse_entity("AuthMessage", raw)
    }

    /// Verificar el OTP de activación recibido por email
    pub async fn verify_otp(&self, email: &str, otp: &str) -> ApiResult<AuthMessage> {
        let request = VerifyOtpRequest {
            email: email.to_string(),
            otp: otp.to_string(),
        };
        let body = validated_body("VerifyOtpRequest", &request)?;

        let raw = self
            .client
            .request(Method::POST, "auth/verify-otp/", None, Some(&body))
            .await?;
        parse_entity("AuthMessage", raw)
    }
}
