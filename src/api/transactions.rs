//! Operaciones de transacciones de combustible

use reqwest::Method;
use uuid::Uuid;

use super::{validated_body, PetrolFinderApi};
use crate::dto::transaction_dto::CreateTransactionRequest;
use crate::models::transaction::{FuelTransaction, TransactionStats};
use crate::utils::errors::ApiResult;
use crate::utils::validation::{parse_entity, parse_entity_list};

impl PetrolFinderApi {
    /// Historial completo de repostajes del usuario
    pub async fn user_transactions(&self) -> ApiResult<Vec<FuelTransaction>> {
        let raw = self
            .client
            .request(Method::GET, "fuel-transactions/", None, None)
            .await?;
        parse_entity_list("FuelTransaction", raw)
    }

    /// Repostajes filtrados por vehículo
    pub async fn vehicle_transactions(&self, vehicle_id: Uuid) -> ApiResult<Vec<FuelTransaction>> {
        let params = [("vehicle", vehicle_id.to_string())];
        let raw = self
            .client
            .request(Method::GET, "fuel-transactions/", Some(&params), None)
            .await?;
        parse_entity_list("FuelTransaction", raw)
    }

    /// Estadísticas agregadas de consumo, globales o por vehículo
    pub async fn transaction_stats(&self, vehicle_id: Option<Uuid>) -> ApiResult<TransactionStats> {
        let params: Vec<(&str, String)> = match vehicle_id {
            Some(id) => vec![("vehicle_id", id.to_string())],
            None => Vec::new(),
        };
        let raw = self
            .client
            .request(
                Method::GET,
                "fuel-transactions/stats/",
                Some(&params),
                None,
            )
            .await?;
        parse_entity("TransactionStats", raw)
    }

    /// Registrar un repostaje
    pub async fn add_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> ApiResult<FuelTransaction> {
        let body = validated_body("CreateTransactionRequest", request)?;
        let raw = self
            .client
            .request(Method::POST, "fuel-transactions/", None, Some(&body))
            .await?;

        let transaction: FuelTransaction = parse_entity("FuelTransaction", raw)?;
        log::info!(
            "⛽ Repostaje registrado: {:.2} L por {:.2}",
            transaction.quantity,
            transaction.total_amount
        );
        Ok(transaction)
    }
}
