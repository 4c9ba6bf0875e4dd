//! Modelo de Propietario
//!
//! Mapea exactamente a la tabla propietario con primary key 'identificacion'
//! (número de identificación nacional, no autogenerado).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Propietario principal - mapea a la tabla propietario
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Propietario {
    pub identificacion: i64,
    pub nombre: String,
    pub apellido: String,
    pub fecha_nacimiento: NaiveDate,
    pub direccion: String,
    pub telefono: i64,
    pub email: String,
}
