//! Operaciones de vehículos
//!
//! Este módulo maneja el CRUD de vehículos del usuario.

use reqwest::Method;
use uuid::Uuid;

use super::{validated_body, PetrolFinderApi};
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::ApiResult;
use crate::utils::validation::{parse_entity, parse_entity_list};

impl PetrolFinderApi {
    /// Listar los vehículos del usuario
    pub async fn vehicles(&self) -> ApiResult<Vec<Vehicle>> {
        let raw = self
            .client
            .request(Method::GET, "vehicles/", None, None)
            .await?;
        parse_entity_list("Vehicle", raw)
    }

    /// Obtener un vehículo por id
    pub async fn vehicle(&self, id: Uuid) -> ApiResult<Vehicle> {
        let path = format!("vehicles/{}/", id);
        let raw = self.client.request(Method::GET, &path, None, None).await?;
        parse_entity("Vehicle", raw)
    }

    /// Registrar un vehículo nuevo
    pub async fn create_vehicle(&self, request: &CreateVehicleRequest) -> ApiResult<Vehicle> {
        let body = validated_body("CreateVehicleRequest", request)?;
        let raw = self
            .client
            .request(Method::POST, "vehicles/", None, Some(&body))
            .await?;

        let vehicle: Vehicle = parse_entity("Vehicle", raw)?;
        log::info!("🚗 Vehículo '{}' registrado", vehicle.name);
        Ok(vehicle)
    }

    /// Actualizar parcialmente un vehículo
    pub async fn update_vehicle(
        &self,
        id: Uuid,
        request: &UpdateVehicleRequest,
    ) -> ApiResult<Vehicle> {
        let body = validated_body("UpdateVehicleRequest", request)?;
        let path = format!("vehicles/{}/", id);
        let raw = self
            .client
            .request(Method::PATCH, &path, None, Some(&body))
            .await?;
        parse_entity("Vehicle", raw)
    }

    /// Eliminar un vehículo
    pub async fn delete_vehicle(&self, id: Uuid) -> ApiResult<()> {
        let path = format!("vehicles/{}/", id);
        self.client
            .request(Method::DELETE, &path, None, None)
            .await?;
        log::info!("🗑️ Vehículo {} eliminado", id);
        Ok(())
    }
}
