//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno del cliente: endpoint
//! base del backend y timeout del transporte HTTP.

use std::env;

/// URL base por defecto del backend
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Timeout por defecto del transporte HTTP, en segundos
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub api_base_url: String,
    pub http_timeout_secs: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde variables de entorno, con defaults
    /// documentados cuando faltan o no parsean
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("PETROL_FINDER_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            http_timeout_secs: env::var("PETROL_FINDER_HTTP_TIMEOUT")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }

    /// Configuración apuntando a una URL base explícita (tests, demos)
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}
