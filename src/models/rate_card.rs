//! Modelo de RateCard
//!
//! Tarjetas de tarifas por compañía. Solo la tarjeta activa participa
//! del pricing; las reemplazadas quedan con is_active = false.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tarjeta de tarifas - mapea exactamente a la tabla rate_cards
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RateCard {
    pub id: Uuid,
    pub company_id: Uuid,
    pub per_article_rate: Decimal,
    // base_rate se conserva en el schema pero el pricing no lo usa
    pub base_rate: Decimal,
    pub effective_from: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
