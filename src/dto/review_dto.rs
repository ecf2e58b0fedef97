use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

// Nueva reseña de una estación
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateReviewRequest {
    pub station: Uuid,

    #[validate(range(min = 1, max = 5))]
    pub rating: i32,

    #[validate(length(min = 1, max = 2000))]
    pub comment: String,

    #[validate(range(min = 1, max = 5))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_rating: Option<i32>,

    #[validate(range(min = 1, max = 5))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanliness_rating: Option<i32>,

    #[validate(range(min = 1, max = 5))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_rating: Option<i32>,
}
