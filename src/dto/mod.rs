//! DTOs de requests salientes
//!
//! Este módulo contiene los cuerpos y parámetros que el cliente envía al
//! backend. Se validan antes de viajar, con las mismas constraints que el
//! backend aplica del otro lado.

pub mod alert_dto;
pub mod auth_dto;
pub mod price_dto;
pub mod review_dto;
pub mod station_dto;
pub mod transaction_dto;
pub mod trip_dto;
pub mod vehicle_dto;
