//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! de bookings, consignatarios y vehículos.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use uuid::Uuid;
use validator::ValidationError;

lazy_static! {
    /// Pincode de destino: 6 dígitos, no puede empezar por cero
    static ref PINCODE_RE: Regex = Regex::new(r"^[1-9][0-9]{5}$").unwrap();
    /// Prefijo LR de un batch: "LR" seguido de dígitos
    static ref LR_PREFIX_RE: Regex = Regex::new(r"^LR[0-9]+$").unwrap();
}

/// Validar y convertir string a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || !value.contains('.') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono (básico)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let clean_phone = value.chars().filter(|c| c.is_ascii_digit()).collect::<String>();
    if clean_phone.len() < 10 || clean_phone.len() > 15 {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de pincode de destino (6 dígitos)
pub fn validate_pincode(value: &str) -> Result<(), ValidationError> {
    if !PINCODE_RE.is_match(value) {
        let mut error = ValidationError::new("pincode");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"6 digits, non-zero leading".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de prefijo LR para batch bookings
pub fn validate_lr_prefix(value: &str) -> Result<(), ValidationError> {
    if !LR_PREFIX_RE.is_match(value) {
        let mut error = ValidationError::new("lr_prefix");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"LR followed by digits".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de matrícula de vehículo
pub fn validate_registration_number(value: &str) -> Result<(), ValidationError> {
    let clean_plate = value.replace([' ', '-', '_'], "");
    if clean_plate.len() < 5 || clean_plate.len() > 12 {
        let mut error = ValidationError::new("registration_number");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uuid() {
        let valid_uuid = "550e8400-e29b-41d4-a716-446655440000";
        assert!(validate_uuid(valid_uuid).is_ok());

        let invalid_uuid = "invalid-uuid";
        assert!(validate_uuid(invalid_uuid).is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2025-01-15").is_ok());
        assert!(validate_date("2025/01/15").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("x").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-5).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("test@").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("1234567890123456").is_err());
    }

    #[test]
    fn test_validate_pincode() {
        assert!(validate_pincode("411001").is_ok());
        assert!(validate_pincode("400076").is_ok());
        assert!(validate_pincode("041100").is_err());
        assert!(validate_pincode("4110").is_err());
        assert!(validate_pincode("41100A").is_err());
    }

    #[test]
    fn test_validate_lr_prefix() {
        assert!(validate_lr_prefix("LR123").is_ok());
        assert!(validate_lr_prefix("LR1755000000000").is_ok());
        assert!(validate_lr_prefix("123").is_err());
        assert!(validate_lr_prefix("LR").is_err());
        assert!(validate_lr_prefix("lr123").is_err());
    }

    #[test]
    fn test_validate_registration_number() {
        assert!(validate_registration_number("MH-12-AB-1234").is_ok());
        assert!(validate_registration_number("KA01AA1").is_ok());
        assert!(validate_registration_number("A-1").is_err());
        assert!(validate_registration_number("ABCDEFGHIJKLMN").is_err());
    }
}
