//! Petrol Finder Client
//!
//! Cliente de acceso al backend de Petrol Finder. Expone una fachada por
//! recurso (`PetrolFinderApi`), un cliente HTTP autenticado y los modelos
//! validados que devuelve la API.

pub mod api;
pub mod client;
pub mod config;
pub mod dto;
pub mod models;
pub mod services;
pub mod session;
pub mod utils;

pub use api::PetrolFinderApi;
pub use client::ApiClient;
pub use config::environment::EnvironmentConfig;
pub use services::geolocation::{
    resolve_position, Coordinates, FixedLocationProvider, LocationProvider, DEFAULT_LOCATION,
};
pub use session::SessionStore;
pub use utils::errors::{ApiError, ApiResult, LocationError};
