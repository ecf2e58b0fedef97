//! Fachada de la API
//!
//! Este módulo expone una operación por capacidad del backend. Cada
//! operación construye el request desde argumentos tipados, delega en el
//! cliente autenticado y valida la respuesta contra el esquema de su
//! entidad antes de devolverla. La primera falla se propaga; ninguna
//! operación reintenta ni cachea.

pub mod alerts;
pub mod auth;
pub mod dashboard;
pub mod favorites;
pub mod fuel;
pub mod notifications;
pub mod promotions;
pub mod reviews;
pub mod stations;
pub mod transactions;
pub mod trips;
pub mod users;
pub mod vehicles;

use serde::Serialize;
use serde_json::Value;
use validator::Validate;

use crate::client::ApiClient;
use crate::config::environment::EnvironmentConfig;
use crate::session::SessionStore;
use crate::utils::errors::{schema_error, shape_error, ApiResult};

/// Fachada tipada del backend Petrol Finder
#[derive(Clone)]
pub struct PetrolFinderApi {
    client: ApiClient,
}

impl PetrolFinderApi {
    /// Construir la fachada sobre la configuración dada y un store de sesión
    pub fn new(config: &EnvironmentConfig, session: SessionStore) -> ApiResult<Self> {
        Ok(Self {
            client: ApiClient::new(config, session)?,
        })
    }

    /// Fachada con la configuración del entorno y una sesión nueva vacía
    pub fn from_env() -> ApiResult<Self> {
        Self::new(&EnvironmentConfig::from_env(), SessionStore::new())
    }

    /// Store de sesión que consulta el cliente de esta fachada
    pub fn session(&self) -> &SessionStore {
        self.client.session()
    }
}

/// Validar un request saliente y serializarlo como cuerpo JSON
pub(crate) fn validated_body<T>(entity: &'static str, request: &T) -> ApiResult<Value>
where
    T: Serialize + Validate,
{
    request.validate().map_err(|e| schema_error(entity, &e))?;
    serde_json::to_value(request).map_err(|e| shape_error(entity, &e))
}
