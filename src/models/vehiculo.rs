//! Modelo de Vehiculo
//!
//! Este módulo contiene el struct Vehiculo y la fila con la etiqueta del
//! tipo resuelta vía JOIN explícito. Mapea exactamente al schema PostgreSQL
//! con primary key 'placa' (suministrada por el cliente, no generada).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehiculo principal - mapea a la tabla vehiculos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehiculo {
    pub placa: String,
    pub marca: String,
    pub vin: String,
    pub linea: String,
    pub cilindrada: String,
    pub color: String,
    pub chasis: String,
    pub modelo: String,
    pub propietario_identificacion: i64,
    pub tipo_vehiculo_id: i64,
}

/// Fila de vehículo con la etiqueta del tipo resuelta (JOIN con tipo_vehiculo)
#[derive(Debug, Clone, FromRow)]
pub struct VehiculoConTipo {
    pub placa: String,
    pub marca: String,
    pub vin: String,
    pub linea: String,
    pub cilindrada: String,
    pub color: String,
    pub chasis: String,
    pub modelo: String,
    pub propietario_identificacion: i64,
    pub tipo_vehiculo: String,
}
