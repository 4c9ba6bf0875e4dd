//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! que no se expresan con los atributos derive de validator.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref PLACA_RE: Regex = Regex::new(r"^[A-Z0-9]{5,10}$").unwrap();
}

/// Validar formato de placa: alfanumérica de 5 a 10 caracteres,
/// ignorando espacios y guiones separadores
pub fn validate_placa(value: &str) -> Result<(), ValidationError> {
    let normalizada = value.replace([' ', '-'], "").to_uppercase();
    if !PLACA_RE.is_match(&normalizada) {
        let mut error = ValidationError::new("placa");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_placa() {
        assert!(validate_placa("ABC123").is_ok());
        assert!(validate_placa("abc123").is_ok());
        assert!(validate_placa("AB-123-CD").is_ok());
        assert!(validate_placa("A").is_err());
        assert!(validate_placa("ABCDEFGHIJK").is_err());
        assert!(validate_placa("AB!123").is_err());
    }
}
