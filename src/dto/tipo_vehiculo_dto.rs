use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::tipo_vehiculo::TipoVehiculo;

// Request para crear un tipo de vehículo (el id lo asigna la base de datos)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTipoVehiculoRequest {
    #[validate(length(min = 1, max = 50))]
    pub tipo_vehiculo: String,
}

// Request para reemplazar un tipo de vehículo (entidad completa, id incluido)
#[derive(Debug, Deserialize, Validate)]
pub struct TipoVehiculoRequest {
    #[validate(range(min = 1))]
    pub id: i64,

    #[validate(length(min = 1, max = 50))]
    pub tipo_vehiculo: String,
}

// Response de tipo de vehículo, siempre con el id asignado
#[derive(Debug, Serialize)]
pub struct TipoVehiculoResponse {
    pub id: i64,
    pub tipo_vehiculo: String,
}

impl From<TipoVehiculo> for TipoVehiculoResponse {
    fn from(tipo: TipoVehiculo) -> Self {
        Self {
            id: tipo.id,
            tipo_vehiculo: tipo.tipo_vehiculo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_incluye_id_generado() {
        let response = TipoVehiculoResponse::from(TipoVehiculo {
            id: 1,
            tipo_vehiculo: "Sedan".to_string(),
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "tipo_vehiculo": "Sedan"}));
    }

    #[test]
    fn test_etiqueta_vacia_falla_validacion() {
        let request = CreateTipoVehiculoRequest {
            tipo_vehiculo: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
