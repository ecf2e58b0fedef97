//! Operaciones de promociones

use reqwest::Method;

use super::PetrolFinderApi;
use crate::models::company::PromotionCampaign;
use crate::utils::errors::ApiResult;
use crate::utils::validation::parse_entity_list;

impl PetrolFinderApi {
    /// Campañas promocionales activas de las compañías
    pub async fn active_promotions(&self) -> ApiResult<Vec<PromotionCampaign>> {
        let raw = self
            .client
            .request(Method::GET, "promotions/", None, None)
            .await?;
        parse_entity_list("PromotionCampaign", raw)
    }
}
