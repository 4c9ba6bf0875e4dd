//! Modelos del sistema
//!
//! Este módulo contiene todos los structs que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod propietario;
pub mod reporte;
pub mod tipo_vehiculo;
pub mod vehiculo;
