//! Modelo de DashboardSummary
//!
//! Este módulo contiene el resumen agregado que alimenta la pantalla
//! principal del dashboard.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::transaction::FuelTransaction;

/// Resumen agregado de la cuenta del usuario
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct DashboardSummary {
    pub vehicles_count: i64,
    pub favorites_count: i64,

    #[validate]
    pub recent_transactions: Vec<FuelTransaction>,

    pub active_alerts: i64,
    pub unread_notifications: i64,
    pub month_spending: f64,
}
