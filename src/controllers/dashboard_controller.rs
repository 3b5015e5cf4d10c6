use crate::dto::dashboard_dto::DashboardSummary;
use crate::dto::ApiResponse;
use crate::repositories::DashboardRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct DashboardController {
    repository: DashboardRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DashboardRepository::new(pool),
        }
    }

    pub async fn summary(&self) -> Result<ApiResponse<DashboardSummary>, AppError> {
        let summary = self.repository.summary().await?;
        Ok(ApiResponse::success(summary))
    }
}
