//! Modelo de Company
//!
//! Compañías cliente que registran bookings. El password_hash nunca
//! sale en las respuestas (ver CompanyResponse en los DTOs).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Compañía - mapea exactamente a la tabla companies
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub contact_person: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
