//! Sistema de manejo de errores
//!
//! Este módulo define la taxonomía de errores del cliente: fallos de red,
//! respuestas HTTP no exitosas, validación de esquemas y geolocalización.

use serde_json::Value;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Errores principales del cliente
#[derive(Error, Debug)]
pub enum ApiError {
    /// La petición nunca obtuvo una respuesta del backend (DNS, conexión,
    /// timeout, cuerpo truncado). No lleva status code.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// El backend respondió con un status fuera del rango 2xx. `payload`
    /// conserva el cuerpo de error si era JSON parseable.
    #[error("HTTP {status} from backend")]
    Http { status: u16, payload: Option<Value> },

    /// La respuesta (o un request saliente) no cumple el esquema declarado.
    /// `detail` nombra los campos ofensores y la constraint violada.
    #[error("Validation error in {entity}: {detail}")]
    Validation { entity: &'static str, detail: String },

    /// Fallo del proveedor de geolocalización
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
}

/// Razones de fallo al obtener la posición del usuario
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    #[error("permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("timed out acquiring position")]
    Timeout,
}

/// Resultado tipado para operaciones que pueden fallar
pub type ApiResult<T> = Result<T, ApiError>;

/// Función helper para crear errores HTTP a partir del status y el cuerpo
pub fn http_error(status: reqwest::StatusCode, payload: Option<Value>) -> ApiError {
    ApiError::Http {
        status: status.as_u16(),
        payload,
    }
}

/// Función helper para errores estructurales (campo ausente o tipo incorrecto)
pub fn shape_error(entity: &'static str, source: &serde_json::Error) -> ApiError {
    ApiError::Validation {
        entity,
        detail: source.to_string(),
    }
}

/// Función helper para errores de constraints declaradas en el esquema
pub fn schema_error(entity: &'static str, errors: &ValidationErrors) -> ApiError {
    ApiError::Validation {
        entity,
        detail: describe_validation_errors(errors),
    }
}

/// Función helper para señalar un único campo inválido
pub fn field_error(entity: &'static str, field: &str, constraint: &str) -> ApiError {
    ApiError::Validation {
        entity,
        detail: format!("{}: {}", field, constraint),
    }
}

/// Aplanar un árbol de `ValidationErrors` en rutas `campo: constraint`,
/// ordenadas para que el mismo fallo produzca siempre el mismo detalle.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts = Vec::new();
    collect_error_paths(errors, "", &mut parts);
    parts.sort();
    parts.join("; ")
}

fn collect_error_paths(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            (*field).to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    out.push(format!("{}: {}", path, error.code));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_error_paths(nested, &path, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_error_paths(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}
