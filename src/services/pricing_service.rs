//! Pricing engine
//!
//! Resuelve la tarifa por artículo de una compañía y calcula el total
//! de un booking. El cálculo es una función pura sobre los inputs ya
//! resueltos; una compañía sin tarjeta activa cae en la tarifa default
//! en lugar de fallar el booking.

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repositories::RateCardRepository;
use crate::utils::errors::AppResult;

lazy_static! {
    /// Tarifa default: 10.00 por artículo cuando la compañía no tiene
    /// tarjeta activa o la tarjeta no se puede resolver.
    pub static ref DEFAULT_PER_ARTICLE_RATE: Decimal = Decimal::new(1000, 2);
}

/// Total de un booking: article_count × tarifa, a dos decimales.
///
/// No se aplica base_rate ni recargo por tipo de parcel o zona aunque
/// los campos existan en el schema; el grand_total es igual al
/// total_amount.
pub fn compute_price(article_count: i32, rate: Option<Decimal>) -> Decimal {
    let per_article = rate.unwrap_or(*DEFAULT_PER_ARTICLE_RATE);
    (Decimal::from(article_count) * per_article).round_dp(2)
}

pub struct PricingService {
    rate_cards: RateCardRepository,
}

impl PricingService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            rate_cards: RateCardRepository::new(pool),
        }
    }

    /// Tarifa por artículo de la tarjeta activa de la compañía, o None
    /// si no tiene ninguna (el caller decide caer en la default).
    pub async fn resolve_per_article_rate(
        &self,
        company_id: Uuid,
    ) -> AppResult<Option<Decimal>> {
        let card = self.rate_cards.find_active_by_company(company_id).await?;
        Ok(card.map(|c| c.per_article_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_with_company_rate() {
        // 20 artículos × 15.00 = 300.00
        let rate = Some(Decimal::new(1500, 2));
        assert_eq!(compute_price(20, rate), Decimal::new(30000, 2));
    }

    #[test]
    fn test_price_with_default_rate() {
        // sin tarjeta activa: 7 × 10.00 = 70.00
        assert_eq!(compute_price(7, None), Decimal::new(7000, 2));
    }

    #[test]
    fn test_price_single_article() {
        assert_eq!(compute_price(1, None), Decimal::new(1000, 2));
    }

    #[test]
    fn test_price_rounds_to_two_decimals() {
        // 3 × 9.999 = 29.997 → 30.00 (redondeo bancario de round_dp)
        let rate = Some(Decimal::new(9999, 3));
        assert_eq!(compute_price(3, rate), Decimal::new(3000, 2));
    }

    #[test]
    fn test_price_exact_no_float_drift() {
        // 100 × 0.10 = 10.00 exacto, sin acumulación de error binario
        let rate = Some(Decimal::new(10, 2));
        assert_eq!(compute_price(100, rate), Decimal::new(1000, 2));
    }
}
