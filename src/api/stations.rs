//! Operaciones de estaciones
//!
//! Este módulo maneja la búsqueda por cercanía (incluido el flujo con
//! geolocalización y fallback documentado), el detalle de estación y el
//! alternado de favoritas.

use reqwest::Method;
use uuid::Uuid;
use validator::Validate;

use super::{validated_body, PetrolFinderApi};
use crate::dto::station_dto::{NearbyStationsQuery, ToggleFavoriteRequest};
use crate::models::favorite::FavoriteToggle;
use crate::models::fuel::FuelTypeCode;
use crate::models::station::{PetrolStationDetail, PetrolStationSummary};
use crate::services::geolocation::{resolve_position, LocationProvider};
use crate::utils::errors::ApiResult;
use crate::utils::validation::{parse_entity, parse_entity_list};

impl PetrolFinderApi {
    /// Buscar estaciones alrededor de un punto explícito
    pub async fn nearby_stations(
        &self,
        query: &NearbyStationsQuery,
    ) -> ApiResult<Vec<PetrolStationSummary>> {
        query
            .validate()
            .map_err(|e| crate::utils::errors::schema_error("NearbyStationsQuery", &e))?;

        log::info!(
            "🗺️ Buscando estaciones cerca de ({}, {}) radio {} km",
            query.latitude,
            query.longitude,
            query.radius
        );

        let params = query.to_query();
        let raw = self
            .client
            .request(Method::GET, "petrol-stations/nearby/", Some(&params), None)
            .await?;
        parse_entity_list("PetrolStationSummary", raw)
    }

    /// Buscar estaciones alrededor de la posición del usuario. Si el
    /// proveedor de geolocalización falla, la búsqueda sale igual con la
    /// posición por defecto.
    pub async fn nearby_stations_near_me(
        &self,
        provider: &dyn LocationProvider,
        radius: f64,
        fuel_type: Option<FuelTypeCode>,
    ) -> ApiResult<Vec<PetrolStationSummary>> {
        let position = resolve_position(provider).await;
        let query = NearbyStationsQuery {
            latitude: position.latitude,
            longitude: position.longitude,
            radius,
            fuel_type,
        };
        self.nearby_stations(&query).await
    }

    /// Detalle completo de una estación
    pub async fn station_details(&self, id: Uuid) -> ApiResult<PetrolStationDetail> {
        let path = format!("petrol-stations/{}/", id);
        let raw = self.client.request(Method::GET, &path, None, None).await?;
        parse_entity("PetrolStationDetail", raw)
    }

    /// Alternar una estación como favorita, con notas opcionales
    pub async fn toggle_favorite_station(
        &self,
        id: Uuid,
        notes: Option<&str>,
    ) -> ApiResult<FavoriteToggle> {
        let request = ToggleFavoriteRequest {
            notes: notes.map(|n| n.to_string()),
        };
        let body = validated_body("ToggleFavoriteRequest", &request)?;

        let path = format!("petrol-stations/{}/toggle_favorite/", id);
        let raw = self
            .client
            .request(Method::POST, &path, None, Some(&body))
            .await?;

        let toggle: FavoriteToggle = parse_entity("FavoriteToggle", raw)?;
        log::info!("⭐ Favorita alternada para {}: {}", id, toggle.status);
        Ok(toggle)
    }
}
