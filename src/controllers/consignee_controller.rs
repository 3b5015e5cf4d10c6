use crate::dto::consignee_dto::{
    ApproveConsigneeRequest, ConsigneeResponse, CreateConsigneeRequest, RejectConsigneeRequest,
    UpdateConsigneeRequest,
};
use crate::dto::ApiResponse;
use crate::repositories::ConsigneeRepository;
use crate::utils::errors::AppError;
use crate::utils::validation;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ConsigneeController {
    repository: ConsigneeRepository,
}

impl ConsigneeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ConsigneeRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateConsigneeRequest,
    ) -> Result<ApiResponse<ConsigneeResponse>, AppError> {
        // Validar datos de entrada
        request.validate().map_err(AppError::Validation)?;

        if request.name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "El nombre del consignatario es requerido".to_string(),
            ));
        }
        if request.address.trim().is_empty() {
            return Err(AppError::ValidationError(
                "La dirección es requerida".to_string(),
            ));
        }
        if let Some(pincode) = &request.pincode {
            validation::validate_pincode(pincode).map_err(|_| {
                AppError::ValidationError("El pincode debe tener 6 dígitos".to_string())
            })?;
        }

        let consignee = self
            .repository
            .create(
                request.company_id,
                request.name,
                request.address,
                request.city,
                request.pincode,
                request.contact_phone,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            ConsigneeResponse::from(consignee),
            "Consignatario registrado, pendiente de aprobación".to_string(),
        ))
    }

    pub async fn list_by_company(
        &self,
        company_id: Uuid,
    ) -> Result<ApiResponse<Vec<ConsigneeResponse>>, AppError> {
        let consignees = self.repository.find_by_company(company_id).await?;
        let response = consignees.into_iter().map(ConsigneeResponse::from).collect();
        Ok(ApiResponse::success(response))
    }

    pub async fn list_pending(&self) -> Result<ApiResponse<Vec<ConsigneeResponse>>, AppError> {
        let consignees = self.repository.find_pending().await?;
        let response = consignees.into_iter().map(ConsigneeResponse::from).collect();
        Ok(ApiResponse::success(response))
    }

    /// Consignatarios elegibles para pre-llenar bookings: solo APPROVED.
    pub async fn list_approved(
        &self,
        company_id: Uuid,
    ) -> Result<ApiResponse<Vec<ConsigneeResponse>>, AppError> {
        let consignees = self.repository.find_approved_by_company(company_id).await?;
        let response = consignees.into_iter().map(ConsigneeResponse::from).collect();
        Ok(ApiResponse::success(response))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ApiResponse<ConsigneeResponse>, AppError> {
        let consignee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Consignatario no encontrado".to_string()))?;

        Ok(ApiResponse::success(ConsigneeResponse::from(consignee)))
    }

    /// Aprobación de un consignatario PENDING. El chequeo de unicidad
    /// del número corre antes de cualquier mutación; si falla no se
    /// toca ninguna fila.
    pub async fn approve(
        &self,
        id: Uuid,
        request: ApproveConsigneeRequest,
    ) -> Result<ApiResponse<ConsigneeResponse>, AppError> {
        // Validar datos de entrada
        request.validate().map_err(AppError::Validation)?;

        if request.consignee_number.trim().is_empty() {
            return Err(AppError::ValidationError(
                "El número de consignatario es requerido".to_string(),
            ));
        }

        if self
            .repository
            .number_taken(&request.consignee_number, id)
            .await?
        {
            return Err(AppError::Conflict(
                "El número de consignatario ya está en uso".to_string(),
            ));
        }

        let consignee = self
            .repository
            .approve(id, request.consignee_number)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Consignatario no encontrado o ya procesado".to_string())
            })?;

        Ok(ApiResponse::success_with_message(
            ConsigneeResponse::from(consignee),
            "Consignatario aprobado exitosamente".to_string(),
        ))
    }

    /// Rechazo de un consignatario PENDING. El motivo es obligatorio y
    /// se valida antes de mutar nada.
    pub async fn reject(
        &self,
        id: Uuid,
        request: RejectConsigneeRequest,
    ) -> Result<ApiResponse<ConsigneeResponse>, AppError> {
        // Validar datos de entrada
        request.validate().map_err(AppError::Validation)?;

        if request.reason.trim().is_empty() {
            return Err(AppError::ValidationError(
                "El motivo del rechazo es requerido".to_string(),
            ));
        }

        let consignee = self
            .repository
            .reject(id, request.reason)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Consignatario no encontrado o ya procesado".to_string())
            })?;

        Ok(ApiResponse::success_with_message(
            ConsigneeResponse::from(consignee),
            "Consignatario rechazado".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateConsigneeRequest,
    ) -> Result<ApiResponse<ConsigneeResponse>, AppError> {
        if let Some(pincode) = &request.pincode {
            validation::validate_pincode(pincode).map_err(|_| {
                AppError::ValidationError("El pincode debe tener 6 dígitos".to_string())
            })?;
        }

        let consignee = self
            .repository
            .update(
                id,
                request.company_id,
                request.name,
                request.address,
                request.city,
                request.pincode,
                request.contact_phone,
            )
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    "Consignatario no encontrado o pendiente de revisión".to_string(),
                )
            })?;

        Ok(ApiResponse::success_with_message(
            ConsigneeResponse::from(consignee),
            "Consignatario actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        let deleted = self.repository.delete(id, company_id).await?;
        if !deleted {
            return Err(AppError::NotFound(
                "Consignatario no encontrado o pendiente de revisión".to_string(),
            ));
        }
        Ok(())
    }
}
