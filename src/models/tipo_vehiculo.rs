//! Modelo de TipoVehiculo
//!
//! Categoría de vehículo ("Sedan", "Camioneta", ...) con id autoincremental.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Tipo de vehículo - mapea a la tabla tipo_vehiculo
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TipoVehiculo {
    pub id: i64,
    pub tipo_vehiculo: String,
}
