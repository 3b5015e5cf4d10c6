use crate::models::RateCard;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct RateCardRepository {
    pool: PgPool,
}

impl RateCardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Tarjeta activa de la compañía, la más reciente por effective_from.
    /// Devuelve None (no error) si la compañía no tiene tarjeta activa.
    pub async fn find_active_by_company(
        &self,
        company_id: Uuid,
    ) -> Result<Option<RateCard>, AppError> {
        let card = sqlx::query_as::<_, RateCard>(
            r#"
            SELECT * FROM rate_cards
            WHERE company_id = $1 AND is_active = TRUE
            ORDER BY effective_from DESC, created_at DESC
            LIMIT 1
            "#,
        )
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding active rate card: {}", e)))?;

        Ok(card)
    }

    /// Reemplaza la tarjeta activa: desactiva todas las anteriores y
    /// crea la nueva. Son dos statements secuenciales sin transacción;
    /// entre ambos existe una ventana en la que un pricing concurrente
    /// puede caer en la tarifa default.
    pub async fn replace_for_company(
        &self,
        company_id: Uuid,
        per_article_rate: Decimal,
        base_rate: Decimal,
        effective_from: NaiveDate,
    ) -> Result<RateCard, AppError> {
        sqlx::query("UPDATE rate_cards SET is_active = FALSE WHERE company_id = $1 AND is_active = TRUE")
            .bind(company_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deactivating rate cards: {}", e)))?;

        let id = Uuid::new_v4();

        let card = sqlx::query_as::<_, RateCard>(
            r#"
            INSERT INTO rate_cards (id, company_id, per_article_rate, base_rate, effective_from, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, TRUE, $6)
            RETURNING *
            "#
        )
        .bind(id)
        .bind(company_id)
        .bind(per_article_rate)
        .bind(base_rate)
        .bind(effective_from)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating rate card: {}", e)))?;

        Ok(card)
    }

    pub async fn find_by_company(&self, company_id: Uuid) -> Result<Vec<RateCard>, AppError> {
        let cards = sqlx::query_as::<_, RateCard>(
            "SELECT * FROM rate_cards WHERE company_id = $1 ORDER BY created_at DESC",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing rate cards: {}", e)))?;

        Ok(cards)
    }
}
