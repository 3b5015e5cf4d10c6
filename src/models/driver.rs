//! Modelo de Driver
//!
//! Conductores de la flota, referenciados por vehículos y bookings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Conductor - mapea exactamente a la tabla drivers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
    pub contact_phone: Option<String>,
    pub license_number: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
