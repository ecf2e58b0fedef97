//! Operaciones de reseñas

use reqwest::Method;
use uuid::Uuid;

use super::{validated_body, PetrolFinderApi};
use crate::dto::review_dto::CreateReviewRequest;
use crate::models::review::Review;
use crate::utils::errors::ApiResult;
use crate::utils::validation::{parse_entity, parse_entity_list};

impl PetrolFinderApi {
    /// Reseñas de una estación
    pub async fn station_reviews(&self, station_id: Uuid) -> ApiResult<Vec<Review>> {
        let params = [("station", station_id.to_string())];
        let raw = self
            .client
            .request(Method::GET, "reviews/", Some(&params), None)
            .await?;
        parse_entity_list("Review", raw)
    }

    /// Publicar una reseña
    pub async fn add_review(&self, request: &CreateReviewRequest) -> ApiResult<Review> {
        let body = validated_body("CreateReviewRequest", request)?;
        let raw = self
            .client
            .request(Method::POST, "reviews/", None, Some(&body))
            .await?;
        parse_entity("Review", raw)
    }
}
