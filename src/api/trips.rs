//! Operaciones de planes de viaje

use reqwest::Method;

use super::{validated_body, PetrolFinderApi};
use crate::dto::trip_dto::CreateTripPlanRequest;
use crate::models::trip::{TripPlan, TripStopsResult};
use crate::utils::errors::ApiResult;
use crate::utils::validation::{parse_entity, parse_entity_list};

impl PetrolFinderApi {
    /// Planes de viaje del usuario
    pub async fn trip_plans(&self) -> ApiResult<Vec<TripPlan>> {
        let raw = self
            .client
            .request(Method::GET, "trip-plans/", None, None)
            .await?;
        parse_entity_list("TripPlan", raw)
    }

    /// Crear un plan de viaje
    pub async fn create_trip_plan(&self, request: &CreateTripPlanRequest) -> ApiResult<TripPlan> {
        let body = validated_body("CreateTripPlanRequest", request)?;
        let raw = self
            .client
            .request(Method::POST, "trip-plans/", None, Some(&body))
            .await?;

        let plan: TripPlan = parse_entity("TripPlan", raw)?;
        log::info!(
            "🧭 Plan de viaje creado: {} → {}",
            plan.start_address,
            plan.destination_address
        );
        Ok(plan)
    }

    /// Calcular las paradas de recarga de un plan existente
    pub async fn calculate_trip_stops(&self, id: i64) -> ApiResult<TripStopsResult> {
        let path = format!("trip-plans/{}/calculate_stops/", id);
        let raw = self
            .client
            .request(Method::POST, &path, None, None)
            .await?;

        let result: TripStopsResult = parse_entity("TripStopsResult", raw)?;
        log::info!("🧭 Paradas calculadas: {}", result.stops.len());
        Ok(result)
    }
}
