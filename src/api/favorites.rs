//! Operaciones de favoritas

use reqwest::Method;

use super::PetrolFinderApi;
use crate::models::favorite::Favorite;
use crate::utils::errors::ApiResult;
use crate::utils::validation::parse_entity_list;

impl PetrolFinderApi {
    /// Estaciones favoritas del usuario, con el resumen embebido
    pub async fn user_favorites(&self) -> ApiResult<Vec<Favorite>> {
        let raw = self
            .client
            .request(Method::GET, "favorites/", None, None)
            .await?;
        parse_entity_list("Favorite", raw)
    }
}
