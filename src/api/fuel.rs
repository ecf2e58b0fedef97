//! Operaciones de combustibles y precios

use reqwest::Method;
use uuid::Uuid;

use super::{validated_body, PetrolFinderApi};
use crate::dto::price_dto::ReportPriceRequest;
use crate::models::fuel::{FuelPrice, FuelType};
use crate::utils::errors::ApiResult;
use crate::utils::validation::{parse_entity, parse_entity_list};

impl PetrolFinderApi {
    /// Catálogo de tipos de combustible del backend
    pub async fn fuel_types(&self) -> ApiResult<Vec<FuelType>> {
        let raw = self
            .client
            .request(Method::GET, "fuel-types/", None, None)
            .await?;
        parse_entity_list("FuelType", raw)
    }

    /// Últimos precios reportados por combustible para una estación
    pub async fn latest_prices_by_station(&self, station_id: Uuid) -> ApiResult<Vec<FuelPrice>> {
        let params = [("station_id", station_id.to_string())];
        let raw = self
            .client
            .request(
                Method::GET,
                "fuel-prices/latest_by_station/",
                Some(&params),
                None,
            )
            .await?;
        parse_entity_list("FuelPrice", raw)
    }

    /// Reportar un precio observado en una estación
    pub async fn report_fuel_price(&self, request: &ReportPriceRequest) -> ApiResult<FuelPrice> {
        let body = validated_body("ReportPriceRequest", request)?;
        let raw = self
            .client
            .request(Method::POST, "fuel-prices/", None, Some(&body))
            .await?;

        let price: FuelPrice = parse_entity("FuelPrice", raw)?;
        log::info!(
            "💰 Precio {} reportado para '{}'",
            price.price,
            price.station_name
        );
        Ok(price)
    }
}
