use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::propietario::Propietario;

// Request para crear o reemplazar un propietario (PUT es reemplazo completo)
#[derive(Debug, Deserialize, Validate)]
pub struct PropietarioRequest {
    #[validate(range(min = 1))]
    pub identificacion: i64,

    #[validate(length(min = 1, max = 50))]
    pub nombre: String,

    #[validate(length(min = 1, max = 50))]
    pub apellido: String,

    pub fecha_nacimiento: NaiveDate,

    #[validate(length(min = 1, max = 255))]
    pub direccion: String,

    #[validate(range(min = 1))]
    pub telefono: i64,

    #[validate(email, length(max = 255))]
    pub email: String,
}

// Response de propietario
#[derive(Debug, Serialize)]
pub struct PropietarioResponse {
    pub identificacion: i64,
    pub nombre: String,
    pub apellido: String,
    pub fecha_nacimiento: NaiveDate,
    pub direccion: String,
    pub telefono: i64,
    pub email: String,
}

impl From<Propietario> for PropietarioResponse {
    fn from(propietario: Propietario) -> Self {
        Self {
            identificacion: propietario.identificacion,
            nombre: propietario.nombre,
            apellido: propietario.apellido,
            fecha_nacimiento: propietario.fecha_nacimiento,
            direccion: propietario.direccion,
            telefono: propietario.telefono,
            email: propietario.email,
        }
    }
}

impl PropietarioRequest {
    /// Convertir el request en el modelo de fila
    pub fn into_model(self) -> Propietario {
        Propietario {
            identificacion: self.identificacion,
            nombre: self.nombre,
            apellido: self.apellido,
            fecha_nacimiento: self.fecha_nacimiento,
            direccion: self.direccion,
            telefono: self.telefono,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_valido() -> PropietarioRequest {
        serde_json::from_value(serde_json::json!({
            "identificacion": 123,
            "nombre": "Ana",
            "apellido": "Ruiz",
            "fecha_nacimiento": "1990-04-15",
            "direccion": "Calle 10 # 4-21",
            "telefono": 3001234567i64,
            "email": "ana.ruiz@example.com"
        }))
        .unwrap()
    }

    #[test]
    fn test_request_valido_pasa_validacion() {
        assert!(request_valido().validate().is_ok());
    }

    #[test]
    fn test_email_invalido_falla_validacion() {
        let mut request = request_valido();
        request.email = "no-es-un-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_nombre_vacio_falla_validacion() {
        let mut request = request_valido();
        request.nombre = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_fecha_nacimiento_formato_iso() {
        let request = request_valido();
        assert_eq!(request.fecha_nacimiento.to_string(), "1990-04-15");
    }
}
