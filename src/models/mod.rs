//! Modelos del sistema
//!
//! Este módulo contiene el registro de esquemas: todas las entidades que
//! intercambiamos con el backend, con sus constraints declaradas. Cada
//! respuesta pasa por aquí antes de llegar al caller.

pub mod alert;
pub mod company;
pub mod dashboard;
pub mod favorite;
pub mod fuel;
pub mod notification;
pub mod review;
pub mod station;
pub mod transaction;
pub mod trip;
pub mod user;
pub mod vehicle;
