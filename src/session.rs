//! Almacenamiento de sesión
//!
//! Este módulo define el slot de token de sesión compartido por todo el
//! proceso. Inicia vacío, se escribe en el login, se borra en el logout;
//! el cliente HTTP lo consulta al construir cada request.

use std::sync::Arc;
use tokio::sync::RwLock;

/// Slot de token de sesión. Clonar comparte el mismo slot subyacente.
#[derive(Clone, Default)]
pub struct SessionStore {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    /// Crear un store vacío (sin sesión iniciada)
    pub fn new() -> Self {
        Self {
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Leer el token actual, si hay sesión iniciada
    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Guardar el token emitido en el login. Última escritura gana.
    pub async fn set_token(&self, token: String) {
        log::info!("💾 Guardando token de sesión");
        let mut slot = self.token.write().await;
        *slot = Some(token);
    }

    /// Borrar la sesión (logout)
    pub async fn clear(&self) {
        log::info!("🧹 Sesión borrada");
        let mut slot = self.token.write().await;
        *slot = None;
    }

    /// Verificar si hay una sesión activa
    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }
}
