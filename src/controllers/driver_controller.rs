use crate::dto::driver_dto::{CreateDriverRequest, DriverResponse, UpdateDriverRequest};
use crate::dto::ApiResponse;
use crate::repositories::DriverRepository;
use crate::utils::errors::AppError;
use crate::utils::validation;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateDriverRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        // Validar datos de entrada
        request.validate().map_err(AppError::Validation)?;

        if request.name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "El nombre del conductor es requerido".to_string(),
            ));
        }
        if request.license_number.trim().is_empty() {
            return Err(AppError::ValidationError(
                "El número de licencia es requerido".to_string(),
            ));
        }
        if let Some(phone) = &request.contact_phone {
            validation::validate_phone(phone).map_err(|_| {
                AppError::ValidationError("El formato del teléfono no es válido".to_string())
            })?;
        }

        if self
            .repository
            .license_exists(&request.license_number)
            .await?
        {
            return Err(AppError::Conflict(
                "El número de licencia ya está registrado".to_string(),
            ));
        }

        let driver = self
            .repository
            .create(request.name, request.contact_phone, request.license_number)
            .await?;

        Ok(ApiResponse::success_with_message(
            DriverResponse::from(driver),
            "Conductor registrado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<DriverResponse>>, AppError> {
        let drivers = self.repository.list().await?;
        let response = drivers.into_iter().map(DriverResponse::from).collect();
        Ok(ApiResponse::success(response))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ApiResponse<DriverResponse>, AppError> {
        let driver = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;

        Ok(ApiResponse::success(DriverResponse::from(driver)))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateDriverRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        let driver = self
            .repository
            .update(
                id,
                request.name,
                request.contact_phone,
                request.license_number,
                request.status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            DriverResponse::from(driver),
            "Conductor actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
