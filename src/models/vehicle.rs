//! Modelo de Vehicle
//!
//! Vehículos de la flota con su estado operacional
//! (Available / Assigned / Dispatched) y la reconciliación de
//! estado derivada de la carga IN-TRANSIT al momento de lectura.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado operacional de un vehículo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    Available,
    Assigned,
    Dispatched,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::Assigned => "Assigned",
            VehicleStatus::Dispatched => "Dispatched",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Available" => Some(VehicleStatus::Available),
            "Assigned" => Some(VehicleStatus::Assigned),
            "Dispatched" => Some(VehicleStatus::Dispatched),
            _ => None,
        }
    }
}

/// Vehículo - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub registration_number: String,
    pub capacity_kg: Decimal,
    pub vehicle_type: Option<String>,
    pub current_driver_id: Option<Uuid>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Proyección de listado: vehículo más el conteo de bookings
/// IN-TRANSIT que lleva asignados (calculado con LEFT JOIN).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleWithLoad {
    pub id: Uuid,
    pub registration_number: String,
    pub capacity_kg: Decimal,
    pub vehicle_type: Option<String>,
    pub current_driver_id: Option<Uuid>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub assigned_parcels: i64,
}

/// Reconciliación de estado al momento de lectura.
///
/// El status guardado puede quedar desactualizado respecto a la carga
/// real (los deliveries no lo actualizan). Esta función deriva el
/// status a mostrar sin escribir nada de vuelta a la tabla:
/// - carga > 0 y guardado "Available"  → "Assigned"
/// - carga = 0 y guardado "Assigned" o "Dispatched" → "Available"
/// - cualquier otro caso → el valor guardado tal cual
pub fn derive_display_status(stored: &str, assigned_parcels: i64) -> String {
    match (VehicleStatus::parse(stored), assigned_parcels) {
        (Some(VehicleStatus::Available), n) if n > 0 => {
            VehicleStatus::Assigned.as_str().to_string()
        }
        (Some(VehicleStatus::Assigned), 0) | (Some(VehicleStatus::Dispatched), 0) => {
            VehicleStatus::Available.as_str().to_string()
        }
        _ => stored.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(VehicleStatus::Available.as_str(), "Available");
        assert_eq!(VehicleStatus::Assigned.as_str(), "Assigned");
        assert_eq!(VehicleStatus::Dispatched.as_str(), "Dispatched");
        assert_eq!(VehicleStatus::parse("AVAILABLE"), None);
    }

    #[test]
    fn test_display_status_promotes_loaded_available() {
        assert_eq!(derive_display_status("Available", 3), "Assigned");
        assert_eq!(derive_display_status("Available", 1), "Assigned");
    }

    #[test]
    fn test_display_status_releases_empty_vehicle() {
        assert_eq!(derive_display_status("Assigned", 0), "Available");
        assert_eq!(derive_display_status("Dispatched", 0), "Available");
    }

    #[test]
    fn test_display_status_keeps_consistent_values() {
        assert_eq!(derive_display_status("Available", 0), "Available");
        assert_eq!(derive_display_status("Assigned", 2), "Assigned");
        assert_eq!(derive_display_status("Dispatched", 5), "Dispatched");
    }

    #[test]
    fn test_display_status_passes_through_unknown() {
        // valores fuera del CHECK no se tocan
        assert_eq!(derive_display_status("Maintenance", 0), "Maintenance");
    }
}
