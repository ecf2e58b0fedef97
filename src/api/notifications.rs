//! Operaciones de notificaciones

use reqwest::Method;

use super::PetrolFinderApi;
use crate::models::notification::{Notification, NotificationAck};
use crate::utils::errors::ApiResult;
use crate::utils::validation::{parse_entity, parse_entity_list};

impl PetrolFinderApi {
    /// Notificaciones del usuario, más recientes primero
    pub async fn notifications(&self) -> ApiResult<Vec<Notification>> {
        let raw = self
            .client
            .request(Method::GET, "notifications/", None, None)
            .await?;
        parse_entity_list("Notification", raw)
    }

    /// Marcar una notificación como leída
    pub async fn mark_notification_read(&self, id: i64) -> ApiResult<NotificationAck> {
        let path = format!("notifications/{}/mark_read/", id);
        let raw = self
            .client
            .request(Method::POST, &path, None, None)
            .await?;
        parse_entity("NotificationAck", raw)
    }

    /// Marcar todas las notificaciones como leídas
    pub async fn mark_all_notifications_read(&self) -> ApiResult<NotificationAck> {
        let raw = self
            .client
            .request(Method::POST, "notifications/mark_all_read/", None, None)
            .await?;

        let ack: NotificationAck = parse_entity("NotificationAck", raw)?;
        log::info!("🔕 Notificaciones marcadas como leídas");
        Ok(ack)
    }
}
