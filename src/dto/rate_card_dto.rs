//! DTOs de tarjetas de tarifas

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::RateCard;

// Request para crear una tarjeta de tarifas (desactiva las anteriores)
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateRateCardRequest {
    pub company_id: Uuid,
    pub per_article_rate: Decimal,
    pub base_rate: Option<Decimal>,
    pub effective_from: Option<NaiveDate>,
}

// Response de tarjeta de tarifas
#[derive(Debug, Serialize)]
pub struct RateCardResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub per_article_rate: Decimal,
    pub base_rate: Decimal,
    pub effective_from: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<RateCard> for RateCardResponse {
    fn from(card: RateCard) -> Self {
        Self {
            id: card.id,
            company_id: card.company_id,
            per_article_rate: card.per_article_rate,
            base_rate: card.base_rate,
            effective_from: card.effective_from,
            is_active: card.is_active,
            created_at: card.created_at,
        }
    }
}
