use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehiculo::{Vehiculo, VehiculoConTipo};
use crate::utils::validation::validate_placa;

// Request para crear o reemplazar un vehículo; el tipo viaja como id numérico
// y el propietario como su identificación
#[derive(Debug, Deserialize, Validate)]
pub struct VehiculoRequest {
    #[validate(custom = "validate_placa")]
    pub placa: String,

    #[validate(length(min = 1, max = 50))]
    pub marca: String,

    #[validate(length(min = 1, max = 50))]
    pub vin: String,

    #[validate(length(min = 1, max = 50))]
    pub linea: String,

    #[validate(length(min = 1, max = 50))]
    pub cilindrada: String,

    #[validate(length(min = 1, max = 255))]
    pub color: String,

    #[validate(length(min = 1, max = 20))]
    pub chasis: String,

    #[validate(range(min = 1))]
    pub tipo_vehiculo: i64,

    #[validate(length(min = 1, max = 50))]
    pub modelo: String,

    #[validate(range(min = 1))]
    pub propietario_identificacion: i64,
}

// Response de vehículo; el tipo se rinde siempre como su etiqueta
#[derive(Debug, Serialize)]
pub struct VehiculoResponse {
    pub placa: String,
    pub marca: String,
    pub vin: String,
    pub linea: String,
    pub cilindrada: String,
    pub color: String,
    pub chasis: String,
    pub tipo_vehiculo: String,
    pub modelo: String,
    pub propietario_identificacion: i64,
}

impl From<VehiculoConTipo> for VehiculoResponse {
    fn from(vehiculo: VehiculoConTipo) -> Self {
        Self {
            placa: vehiculo.placa,
            marca: vehiculo.marca,
            vin: vehiculo.vin,
            linea: vehiculo.linea,
            cilindrada: vehiculo.cilindrada,
            color: vehiculo.color,
            chasis: vehiculo.chasis,
            tipo_vehiculo: vehiculo.tipo_vehiculo,
            modelo: vehiculo.modelo,
            propietario_identificacion: vehiculo.propietario_identificacion,
        }
    }
}

impl VehiculoRequest {
    /// Convertir el request en el modelo de fila
    pub fn into_model(self) -> Vehiculo {
        Vehiculo {
            placa: self.placa,
            marca: self.marca,
            vin: self.vin,
            linea: self.linea,
            cilindrada: self.cilindrada,
            color: self.color,
            chasis: self.chasis,
            modelo: self.modelo,
            propietario_identificacion: self.propietario_identificacion,
            tipo_vehiculo_id: self.tipo_vehiculo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_json() -> serde_json::Value {
        serde_json::json!({
            "placa": "ABC123",
            "marca": "Renault",
            "vin": "9FB4SRAH4JM123456",
            "linea": "Logan",
            "cilindrada": "1600",
            "color": "Rojo",
            "chasis": "CH-991204",
            "tipo_vehiculo": 1,
            "modelo": "2019",
            "propietario_identificacion": 123
        })
    }

    #[test]
    fn test_request_deserializa_tipo_como_id() {
        let request: VehiculoRequest = serde_json::from_value(request_json()).unwrap();
        assert_eq!(request.tipo_vehiculo, 1);
        assert_eq!(request.propietario_identificacion, 123);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_response_rinde_tipo_como_etiqueta() {
        let response = VehiculoResponse::from(VehiculoConTipo {
            placa: "ABC123".to_string(),
            marca: "Renault".to_string(),
            vin: "9FB4SRAH4JM123456".to_string(),
            linea: "Logan".to_string(),
            cilindrada: "1600".to_string(),
            color: "Rojo".to_string(),
            chasis: "CH-991204".to_string(),
            modelo: "2019".to_string(),
            propietario_identificacion: 123,
            tipo_vehiculo: "Sedan".to_string(),
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["tipo_vehiculo"], "Sedan");
        assert_eq!(json["propietario_identificacion"], 123);
    }

    #[test]
    fn test_placa_invalida_falla_validacion() {
        let mut json = request_json();
        json["placa"] = serde_json::json!("A!");
        let request: VehiculoRequest = serde_json::from_value(json).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_chasis_demasiado_largo_falla_validacion() {
        let mut json = request_json();
        json["chasis"] = serde_json::json!("X".repeat(21));
        let request: VehiculoRequest = serde_json::from_value(json).unwrap();
        assert!(request.validate().is_err());
    }
}
