use crate::dto::rate_card_dto::{CreateRateCardRequest, RateCardResponse};
use crate::dto::ApiResponse;
use crate::repositories::{CompanyRepository, RateCardRepository};
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct RateCardController {
    repository: RateCardRepository,
    companies: CompanyRepository,
}

impl RateCardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RateCardRepository::new(pool.clone()),
            companies: CompanyRepository::new(pool),
        }
    }

    /// Crea la nueva tarjeta activa de la compañía, desactivando todas
    /// las anteriores.
    pub async fn create(
        &self,
        request: CreateRateCardRequest,
    ) -> Result<ApiResponse<RateCardResponse>, AppError> {
        if request.per_article_rate <= Decimal::ZERO {
            return Err(AppError::ValidationError(
                "La tarifa por artículo debe ser mayor a cero".to_string(),
            ));
        }
        if let Some(base_rate) = request.base_rate {
            if base_rate < Decimal::ZERO {
                return Err(AppError::ValidationError(
                    "La tarifa base no puede ser negativa".to_string(),
                ));
            }
        }

        self.companies
            .find_by_id(request.company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Compañía no encontrada".to_string()))?;

        let card = self
            .repository
            .replace_for_company(
                request.company_id,
                request.per_article_rate,
                request.base_rate.unwrap_or(Decimal::ZERO),
                request
                    .effective_from
                    .unwrap_or_else(|| Utc::now().date_naive()),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            RateCardResponse::from(card),
            "Tarjeta de tarifas creada exitosamente".to_string(),
        ))
    }

    pub async fn list_by_company(
        &self,
        company_id: Uuid,
    ) -> Result<ApiResponse<Vec<RateCardResponse>>, AppError> {
        let cards = self.repository.find_by_company(company_id).await?;
        let response = cards.into_iter().map(RateCardResponse::from).collect();
        Ok(ApiResponse::success(response))
    }

    pub async fn get_active(
        &self,
        company_id: Uuid,
    ) -> Result<ApiResponse<RateCardResponse>, AppError> {
        let card = self
            .repository
            .find_active_by_company(company_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    "La compañía no tiene tarjeta de tarifas activa".to_string(),
                )
            })?;

        Ok(ApiResponse::success(RateCardResponse::from(card)))
    }
}
