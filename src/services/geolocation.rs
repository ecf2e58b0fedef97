//! Servicio de geolocalización
//!
//! Este módulo define el seam del proveedor de posición del usuario. Si el
//! proveedor falla, el flujo documentado es sustituir la posición por
//! `DEFAULT_LOCATION` (Pretoria) y seguir adelante con la búsqueda de
//! estaciones: un fallo de geolocalización nunca la bloquea.

use async_trait::async_trait;

use crate::utils::errors::LocationError;

/// Coordenadas geográficas en grados decimales
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Posición por defecto usada cuando la geolocalización falla
pub const DEFAULT_LOCATION: Coordinates = Coordinates {
    latitude: -25.754,
    longitude: 28.231,
};

/// Proveedor de la posición actual del usuario
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Obtener la posición actual, o la razón por la que no se pudo
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Proveedor fijo: siempre devuelve las coordenadas configuradas
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationProvider {
    coordinates: Coordinates,
}

impl FixedLocationProvider {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinates: Coordinates {
                latitude,
                longitude,
            },
        }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.coordinates)
    }
}

/// Resolver la posición del usuario, cayendo a `DEFAULT_LOCATION` si el
/// proveedor falla
pub async fn resolve_position(provider: &dyn LocationProvider) -> Coordinates {
    match provider.current_position().await {
        Ok(coordinates) => {
            log::info!(
                "📍 Posición obtenida: ({}, {})",
                coordinates.latitude,
                coordinates.longitude
            );
            coordinates
        }
        Err(reason) => {
            log::warn!(
                "⚠️ Geolocalización falló ({}), usando posición por defecto",
                reason
            );
            DEFAULT_LOCATION
        }
    }
}
