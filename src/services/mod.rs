//! Services module
//!
//! Este módulo contiene los colaboradores que no hablan con el backend,
//! hoy únicamente la geolocalización del usuario.

pub mod geolocation;

pub use geolocation::*;
