//! Modelo de Consignee
//!
//! Consignatarios registrados por compañía con workflow de aprobación
//! (PENDING → APPROVED / REJECTED).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del workflow de aprobación de un consignatario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsigneeStatus {
    Pending,
    Approved,
    Rejected,
}

impl ConsigneeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsigneeStatus::Pending => "PENDING",
            ConsigneeStatus::Approved => "APPROVED",
            ConsigneeStatus::Rejected => "REJECTED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(ConsigneeStatus::Pending),
            "APPROVED" => Some(ConsigneeStatus::Approved),
            "REJECTED" => Some(ConsigneeStatus::Rejected),
            _ => None,
        }
    }

    /// Solo PENDING admite decisión; APPROVED y REJECTED son finales.
    pub fn is_decidable(&self) -> bool {
        matches!(self, ConsigneeStatus::Pending)
    }
}

/// Consignatario - mapea exactamente a la tabla consignees
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Consignee {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub pincode: Option<String>,
    pub contact_phone: Option<String>,
    pub status: String,
    // consignee_number se asigna solo al aprobar; rejection_reason solo al rechazar
    pub consignee_number: Option<String>,
    pub rejection_reason: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Consignee {
    /// Status tipado; filas con un valor desconocido no deberían
    /// existir (CHECK en el schema).
    pub fn consignee_status(&self) -> Option<ConsigneeStatus> {
        ConsigneeStatus::parse(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(ConsigneeStatus::Pending.as_str(), "PENDING");
        assert_eq!(ConsigneeStatus::Approved.as_str(), "APPROVED");
        assert_eq!(ConsigneeStatus::Rejected.as_str(), "REJECTED");
    }

    #[test]
    fn test_only_pending_is_decidable() {
        assert!(ConsigneeStatus::Pending.is_decidable());
        assert!(!ConsigneeStatus::Approved.is_decidable());
        assert!(!ConsigneeStatus::Rejected.is_decidable());
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(ConsigneeStatus::parse("pending"), None);
        assert_eq!(ConsigneeStatus::parse(""), None);
        assert_eq!(
            ConsigneeStatus::parse("APPROVED"),
            Some(ConsigneeStatus::Approved)
        );
    }
}
