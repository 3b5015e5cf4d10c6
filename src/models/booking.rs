//! Modelo de Booking
//!
//! Este módulo contiene el struct Booking, el ciclo de vida de estados
//! (BOOKED → IN-TRANSIT → DELIVERED) y sus reglas de transición.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del ciclo de vida de un booking.
///
/// Las columnas de status se guardan como TEXT con los valores de wire
/// (BOOKED / IN-TRANSIT / DELIVERED); este enum concentra las reglas
/// de transición para que ningún otro camino escriba el status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Booked,
    InTransit,
    Delivered,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Booked => "BOOKED",
            BookingStatus::InTransit => "IN-TRANSIT",
            BookingStatus::Delivered => "DELIVERED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "BOOKED" => Some(BookingStatus::Booked),
            "IN-TRANSIT" => Some(BookingStatus::InTransit),
            "DELIVERED" => Some(BookingStatus::Delivered),
            _ => None,
        }
    }

    /// Transiciones legales: BOOKED → IN-TRANSIT → DELIVERED.
    /// No hay vuelta atrás ni salto directo BOOKED → DELIVERED.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Booked, BookingStatus::InTransit)
                | (BookingStatus::InTransit, BookingStatus::Delivered)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Delivered)
    }
}

/// Booking principal - mapea exactamente a la tabla bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub lr_number: String,
    pub booking_date: NaiveDate,
    pub company_id: Uuid,
    pub consignee_name: String,
    pub consignee_contact: Option<String>,
    pub consignee_address: Option<String>,
    pub origin: Option<String>,
    pub destination: String,
    pub destination_pincode: Option<String>,
    pub article_count: i32,
    pub parcel_type: String,
    pub weight: Option<Decimal>,
    pub per_article_rate: Decimal,
    pub total_amount: Decimal,
    pub grand_total: Decimal,
    pub status: String,
    pub assigned_vehicle_id: Option<Uuid>,
    pub assigned_driver_id: Option<Uuid>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Status tipado del booking; filas con un valor desconocido no
    /// deberían existir (CHECK en el schema).
    pub fn booking_status(&self) -> Option<BookingStatus> {
        BookingStatus::parse(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(BookingStatus::Booked.as_str(), "BOOKED");
        assert_eq!(BookingStatus::InTransit.as_str(), "IN-TRANSIT");
        assert_eq!(BookingStatus::Delivered.as_str(), "DELIVERED");
    }

    #[test]
    fn test_status_parse_round_trip() {
        for status in [
            BookingStatus::Booked,
            BookingStatus::InTransit,
            BookingStatus::Delivered,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::parse("CANCELLED"), None);
        assert_eq!(BookingStatus::parse("booked"), None);
    }

    #[test]
    fn test_legal_transitions() {
        assert!(BookingStatus::Booked.can_transition_to(BookingStatus::InTransit));
        assert!(BookingStatus::InTransit.can_transition_to(BookingStatus::Delivered));
    }

    #[test]
    fn test_illegal_transitions() {
        // sin salto directo a DELIVERED
        assert!(!BookingStatus::Booked.can_transition_to(BookingStatus::Delivered));
        // sin vuelta atrás
        assert!(!BookingStatus::InTransit.can_transition_to(BookingStatus::Booked));
        assert!(!BookingStatus::Delivered.can_transition_to(BookingStatus::InTransit));
        assert!(!BookingStatus::Delivered.can_transition_to(BookingStatus::Booked));
        // sin auto-transiciones
        assert!(!BookingStatus::Booked.can_transition_to(BookingStatus::Booked));
        assert!(!BookingStatus::InTransit.can_transition_to(BookingStatus::InTransit));
    }

    #[test]
    fn test_terminal_state() {
        assert!(BookingStatus::Delivered.is_terminal());
        assert!(!BookingStatus::Booked.is_terminal());
        assert!(!BookingStatus::InTransit.is_terminal());
    }
}
