use serde::Serialize;

use crate::models::reporte::PropietarioVehiculoRow;

// Fila plana del reporte: identidad del propietario más los datos del
// vehículo encontrado (o null en los tres campos si no tiene ninguno)
#[derive(Debug, Serialize)]
pub struct PropietarioVehiculoResponse {
    pub identificacion: i64,
    pub nombre: String,
    pub apellido: String,
    pub placa: Option<String>,
    pub marca: Option<String>,
    pub color: Option<String>,
}

impl From<PropietarioVehiculoRow> for PropietarioVehiculoResponse {
    fn from(row: PropietarioVehiculoRow) -> Self {
        Self {
            identificacion: row.identificacion,
            nombre: row.nombre,
            apellido: row.apellido,
            placa: row.placa,
            marca: row.marca,
            color: row.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_propietario_sin_vehiculo_serializa_nulls() {
        let response = PropietarioVehiculoResponse::from(PropietarioVehiculoRow {
            identificacion: 123,
            nombre: "Ana".to_string(),
            apellido: "Ruiz".to_string(),
            placa: None,
            marca: None,
            color: None,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["placa"].is_null());
        assert!(json["marca"].is_null());
        assert!(json["color"].is_null());
        assert_eq!(json["nombre"], "Ana");
    }
}
