//! Operaciones de usuario

use reqwest::Method;

use super::PetrolFinderApi;
use crate::models::user::User;
use crate::utils::errors::ApiResult;
use crate::utils::validation::parse_entity;

impl PetrolFinderApi {
    /// Perfil del usuario autenticado
    pub async fn current_user(&self) -> ApiResult<User> {
        let raw = self
            .client
            .request(Method::GET, "users/me/", None, None)
            .await?;
        parse_entity("User", raw)
    }
}
