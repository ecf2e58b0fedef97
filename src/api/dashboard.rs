//! Operaciones del resumen de dashboard

use reqwest::Method;

use super::PetrolFinderApi;
use crate::models::dashboard::DashboardSummary;
use crate::utils::errors::ApiResult;
use crate::utils::validation::parse_entity;

impl PetrolFinderApi {
    /// Resumen agregado para la pantalla principal
    pub async fn dashboard_summary(&self) -> ApiResult<DashboardSummary> {
        let raw = self
            .client
            .request(Method::GET, "dashboard/summary/", None, None)
            .await?;
        parse_entity("DashboardSummary", raw)
    }
}
