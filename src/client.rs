//! Cliente HTTP autenticado del backend Petrol Finder
//!
//! Este módulo contiene el embudo único de requests salientes: construye la
//! URL sobre el endpoint base configurado, adjunta el token de sesión cuando
//! existe y particiona los fallos en red / HTTP no-2xx. Sin reintentos y sin
//! caché: cada llamada es un round trip fresco.

use reqwest::header;
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;

use crate::config::environment::EnvironmentConfig;
use crate::session::SessionStore;
use crate::utils::errors::{http_error, shape_error, ApiError, ApiResult};

/// Cliente HTTP autenticado (API Petrol Finder)
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Crear nuevo cliente HTTP sobre el endpoint base configurado
    pub fn new(config: &EnvironmentConfig, session: SessionStore) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Acceso al store de sesión que consulta este cliente
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Ejecutar un request contra el backend y devolver el JSON crudo.
    ///
    /// - Adjunta `Authorization: Token <valor>` si hay sesión iniciada.
    /// - Status fuera de 2xx => `ApiError::Http` con el cuerpo JSON parseado
    ///   si lo había.
    /// - Fallo de transporte (DNS, conexión, timeout) => `ApiError::Network`.
    /// - Un 2xx con cuerpo vacío devuelve JSON `null`; un 2xx con cuerpo
    ///   no-JSON se reporta como error de validación de la respuesta.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<&Value>,
    ) -> ApiResult<Value> {
        let url = self.endpoint(path);
        log::info!("📡 {} {}", method, url);

        let mut request = self.http.request(method, &url);

        if let Some(token) = self.session.token().await {
            request = request.header(header::AUTHORIZATION, format!("Token {}", token));
        }

        if let Some(params) = query {
            request = request.query(params);
        }

        if let Some(json) = body {
            request = request.json(json);
        }

        let response = request.send().await.map_err(|e| {
            log::error!("❌ Error de red hacia el backend: {}", e);
            ApiError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("⚠️ Respuesta HTTP {} del backend", status);
            let payload = response.json::<Value>().await.ok();
            return Err(http_error(status, payload));
        }

        let text = response.text().await?;
        if text.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| shape_error("response", &e))
    }
}
