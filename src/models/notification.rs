//! Modelo de Notification
//!
//! Este módulo contiene las notificaciones del usuario y los acuses de
//! marcado como leído.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Notificación dirigida al usuario
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Notification {
    pub id: i64,
    pub user: i64,
    pub notification_type: String,
    pub notification_type_display: String,
    pub title: String,
    pub message: String,
    /// Identificador textual del objeto relacionado; el backend lo entrega
    /// como string (vacío cuando no aplica)
    pub related_object_id: Option<String>,
    pub related_object_type: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Acuse del backend al marcar notificaciones como leídas
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct NotificationAck {
    pub status: String,
}
