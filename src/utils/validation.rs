//! Utilidades de validación
//!
//! Este módulo contiene los helpers de constraints compartidos por los
//! esquemas del registro y los puntos de entrada `parse_entity` /
//! `parse_entity_list` que convierten JSON crudo en entidades tipadas.

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::utils::errors::{field_error, schema_error, shape_error, ApiError, ApiResult};

/// Validar que un valor sea estrictamente positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Adaptador para derives: cantidades f64 estrictamente positivas.
/// El derive de `Validate` entrega los campos f64 por valor.
pub fn validate_positive_quantity(value: f64) -> Result<(), ValidationError> {
    validate_positive(value)
}

/// Validar latitud en grados decimales
pub fn validate_latitude(value: f64) -> Result<(), ValidationError> {
    if value < -90.0 || value > 90.0 {
        let mut error = ValidationError::new("latitude");
        error.add_param("value".into(), &value);
        error.add_param("range".into(), &"-90.0 to 90.0".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar longitud en grados decimales
pub fn validate_longitude(value: f64) -> Result<(), ValidationError> {
    if value < -180.0 || value > 180.0 {
        let mut error = ValidationError::new("longitude");
        error.add_param("value".into(), &value);
        error.add_param("range".into(), &"-180.0 to 180.0".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono (básico)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let clean_phone = value.chars().filter(|c| c.is_digit(10)).collect::<String>();
    if clean_phone.len() < 10 || clean_phone.len() > 15 {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de matrícula de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    let clean_plate = value.replace([' ', '-', '_'], "");
    if clean_plate.len() < 5 || clean_plate.len() > 10 {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Parsear una entidad desde JSON crudo: primero estructura (serde),
/// después constraints (validator). Sin efectos secundarios; el mismo
/// input produce siempre el mismo resultado.
pub fn parse_entity<T>(entity: &'static str, raw: serde_json::Value) -> ApiResult<T>
where
    T: DeserializeOwned + Validate,
{
    let parsed: T = serde_json::from_value(raw).map_err(|e| shape_error(entity, &e))?;
    parsed.validate().map_err(|e| schema_error(entity, &e))?;
    Ok(parsed)
}

/// Parsear una lista de entidades desde un array JSON. Todo-o-nada: el
/// primer elemento inválido falla la lista completa, conservando el índice
/// en el detalle. El orden del servidor se preserva.
pub fn parse_entity_list<T>(entity: &'static str, raw: serde_json::Value) -> ApiResult<Vec<T>>
where
    T: DeserializeOwned + Validate,
{
    let items = match raw {
        serde_json::Value::Array(items) => items,
        _ => return Err(field_error(entity, "(root)", "expected a JSON array")),
    };

    let mut parsed = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match parse_entity::<T>(entity, item) {
            Ok(value) => parsed.push(value),
            Err(ApiError::Validation { entity, detail }) => {
                return Err(ApiError::Validation {
                    entity,
                    detail: format!("[{}] {}", index, detail),
                });
            }
            Err(other) => return Err(other),
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, Validate, PartialEq)]
    struct Sample {
        name: String,

        #[validate(range(min = 1, max = 5))]
        rating: i32,

        #[validate(custom = "super::validate_positive_quantity")]
        price: f64,
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5).is_ok());
        assert!(validate_positive(0.5).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-5.0).is_err());
    }

    #[test]
    fn test_validate_latitude() {
        assert!(validate_latitude(45.0).is_ok());
        assert!(validate_latitude(-25.754).is_ok());
        assert!(validate_latitude(91.0).is_err());
        assert!(validate_latitude(-90.5).is_err());
    }

    #[test]
    fn test_validate_longitude() {
        assert!(validate_longitude(28.231).is_ok());
        assert!(validate_longitude(-181.0).is_err());
        assert!(validate_longitude(180.5).is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("0123456789").is_ok());
        assert!(validate_phone("+27 12 345 6789").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("1234567890123456").is_err());
    }

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("AB-123-CD").is_ok());
        assert!(validate_license_plate("A").is_err());
        assert!(validate_license_plate("ABCDEFGHIJK").is_err());
    }

    #[test]
    fn test_parse_entity_ok() {
        let raw = json!({ "name": "Diesel", "rating": 4, "price": 21.5 });
        let sample: Sample = parse_entity("Sample", raw).unwrap();

        assert_eq!(sample.name, "Diesel");
        assert_eq!(sample.rating, 4);
        assert_eq!(sample.price, 21.5);
    }

    #[test]
    fn test_parse_entity_missing_field_names_it() {
        let raw = json!({ "name": "Diesel", "price": 21.5 });
        let err = parse_entity::<Sample>("Sample", raw).unwrap_err();

        match err {
            ApiError::Validation { entity, detail } => {
                assert_eq!(entity, "Sample");
                assert!(detail.contains("rating"), "detail was: {}", detail);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_entity_constraint_names_field_and_code() {
        let raw = json!({ "name": "Diesel", "rating": 6, "price": 21.5 });
        let err = parse_entity::<Sample>("Sample", raw).unwrap_err();

        match err {
            ApiError::Validation { detail, .. } => {
                assert!(detail.contains("rating: range"), "detail was: {}", detail);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_entity_ignores_unknown_fields() {
        let raw = json!({
            "name": "Diesel",
            "rating": 4,
            "price": 21.5,
            "added_next_release": true
        });
        assert!(parse_entity::<Sample>("Sample", raw).is_ok());
    }

    #[test]
    fn test_parse_entity_is_deterministic() {
        let raw = json!({ "name": "Diesel", "rating": 4, "price": 21.5 });
        let first: Sample = parse_entity("Sample", raw.clone()).unwrap();
        let second: Sample = parse_entity("Sample", raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_entity_list_preserves_order() {
        let raw = json!([
            { "name": "95", "rating": 3, "price": 22.9 },
            { "name": "Diesel", "rating": 5, "price": 21.5 }
        ]);
        let samples: Vec<Sample> = parse_entity_list("Sample", raw).unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].name, "95");
        assert_eq!(samples[1].name, "Diesel");
    }

    #[test]
    fn test_parse_entity_list_fails_whole_on_one_bad_element() {
        let raw = json!([
            { "name": "95", "rating": 3, "price": 22.9 },
            { "name": "Diesel", "rating": 9, "price": 21.5 }
        ]);
        let err = parse_entity_list::<Sample>("Sample", raw).unwrap_err();

        match err {
            ApiError::Validation { detail, .. } => {
                assert!(detail.starts_with("[1]"), "detail was: {}", detail);
                assert!(detail.contains("rating"), "detail was: {}", detail);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_entity_list_rejects_non_array() {
        let raw = json!({ "results": [] });
        let err = parse_entity_list::<Sample>("Sample", raw).unwrap_err();

        match err {
            ApiError::Validation { detail, .. } => {
                assert!(detail.contains("expected a JSON array"), "detail was: {}", detail);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_entity_list_empty_is_ok() {
        let samples: Vec<Sample> = parse_entity_list("Sample", json!([])).unwrap();
        assert!(samples.is_empty());
    }
}
