//! Fila del reporte denormalizado
//!
//! Una fila por propietario con a lo sumo un vehículo asociado; los campos
//! del vehículo quedan en NULL cuando el propietario no tiene ninguno.

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct PropietarioVehiculoRow {
    pub identificacion: i64,
    pub nombre: String,
    pub apellido: String,
    pub placa: Option<String>,
    pub marca: Option<String>,
    pub color: Option<String>,
}
