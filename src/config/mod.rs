//! Configuración del sistema
//!
//! Variables de entorno y parámetros del pool de PostgreSQL.

pub mod database;
pub mod environment;
