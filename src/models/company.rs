//! Modelo de Company
//!
//! Este módulo contiene las compañías de combustible y sus campañas de
//! promoción activas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Compañía de combustible (Shell, Engen, Sasol, ...)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct FuelCompany {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
}

/// Campaña de promoción publicada por una compañía
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct PromotionCampaign {
    pub id: i64,
    pub company: i64,
    pub company_name: String,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
    pub banner_image: Option<String>,
    pub terms_conditions: Option<String>,
    pub created_at: DateTime<Utc>,
}
