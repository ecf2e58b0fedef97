//! Operaciones de alertas de precio

use reqwest::Method;

use super::{validated_body, PetrolFinderApi};
use crate::dto::alert_dto::{CreatePriceAlertRequest, UpdatePriceAlertRequest};
use crate::models::alert::PriceAlert;
use crate::utils::errors::ApiResult;
use crate::utils::validation::{parse_entity, parse_entity_list};

impl PetrolFinderApi {
    /// Alertas de precio del usuario
    pub async fn price_alerts(&self) -> ApiResult<Vec<PriceAlert>> {
        let raw = self
            .client
            .request(Method::GET, "price-alerts/", None, None)
            .await?;
        parse_entity_list("PriceAlert", raw)
    }

    /// Crear una alerta de precio
    pub async fn create_price_alert(
        &self,
        request: &CreatePriceAlertRequest,
    ) -> ApiResult<PriceAlert> {
        let body = validated_body("CreatePriceAlertRequest", request)?;
        let raw = self
            .client
            .request(Method::POST, "price-alerts/", None, Some(&body))
            .await?;

        let alert: PriceAlert = parse_entity("PriceAlert", raw)?;
        log::info!(
            "🔔 Alerta creada: {} bajo {}",
            alert.fuel_type_name,
            alert.target_price
        );
        Ok(alert)
    }

    /// Actualizar parcialmente una alerta
    pub async fn update_price_alert(
        &self,
        id: i64,
        request: &UpdatePriceAlertRequest,
    ) -> ApiResult<PriceAlert> {
        let body = validated_body("UpdatePriceAlertRequest", request)?;
        let path = format!("price-alerts/{}/", id);
        let raw = self
            .client
            .request(Method::PATCH, &path, None, Some(&body))
            .await?;
        parse_entity("PriceAlert", raw)
    }

    /// Eliminar una alerta
    pub async fn delete_price_alert(&self, id: i64) -> ApiResult<()> {
        let path = format!("price-alerts/{}/", id);
        self.client
            .request(Method::DELETE, &path, None, None)
            .await?;
        Ok(())
    }
}
