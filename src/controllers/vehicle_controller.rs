use crate::dto::vehicle_dto::{
    AssignBookingsRequest, AssignmentResponse, CreateVehicleRequest, UpdateVehicleRequest,
    VehicleResponse,
};
use crate::dto::ApiResponse;
use crate::models::VehicleStatus;
use crate::repositories::{DriverRepository, VehicleRepository};
use crate::services::AssignmentService;
use crate::utils::errors::AppError;
use crate::utils::validation;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
    drivers: DriverRepository,
    assignments: AssignmentService,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            assignments: AssignmentService::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        // Validar datos de entrada
        request.validate().map_err(AppError::Validation)?;

        validation::validate_registration_number(&request.registration_number).map_err(|_| {
            AppError::ValidationError("El formato de la matrícula no es válido".to_string())
        })?;
        if request.capacity_kg <= Decimal::ZERO {
            return Err(AppError::ValidationError(
                "La capacidad debe ser mayor a cero".to_string(),
            ));
        }

        // Verificar que la matrícula no exista
        if self
            .repository
            .registration_exists(&request.registration_number)
            .await?
        {
            return Err(AppError::Conflict(
                "La matrícula ya está registrada".to_string(),
            ));
        }

        if let Some(driver_id) = request.current_driver_id {
            self.drivers
                .find_by_id(driver_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;
        }

        let vehicle = self
            .repository
            .create(
                request.registration_number,
                request.capacity_kg,
                request.vehicle_type,
                request.current_driver_id,
            )
            .await?;

        // Vehículo recién creado: sin carga, status guardado Available
        let response = VehicleResponse {
            id: vehicle.id,
            registration_number: vehicle.registration_number,
            capacity_kg: vehicle.capacity_kg,
            vehicle_type: vehicle.vehicle_type,
            current_driver_id: vehicle.current_driver_id,
            status: vehicle.status,
            assigned_parcels: 0,
            created_at: vehicle.created_at,
        };

        Ok(ApiResponse::success_with_message(
            response,
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    /// Listado con status derivado de la carga IN-TRANSIT actual. La
    /// corrección es solo de display: el status guardado no se
    /// escribe de vuelta.
    pub async fn list(&self) -> Result<ApiResponse<Vec<VehicleResponse>>, AppError> {
        let vehicles = self.repository.list_with_load().await?;
        let response = vehicles.into_iter().map(VehicleResponse::from).collect();
        Ok(ApiResponse::success(response))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let vehicle = self
            .repository
            .find_by_id_with_load(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(ApiResponse::success(VehicleResponse::from(vehicle)))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        // Validar datos de entrada
        request.validate().map_err(AppError::Validation)?;

        if let Some(registration) = &request.registration_number {
            validation::validate_registration_number(registration).map_err(|_| {
                AppError::ValidationError("El formato de la matrícula no es válido".to_string())
            })?;
        }
        if let Some(capacity) = request.capacity_kg {
            if capacity <= Decimal::ZERO {
                return Err(AppError::ValidationError(
                    "La capacidad debe ser mayor a cero".to_string(),
                ));
            }
        }
        if let Some(status) = &request.status {
            if VehicleStatus::parse(status).is_none() {
                return Err(AppError::ValidationError(
                    "Status de vehículo inválido".to_string(),
                ));
            }
        }
        if let Some(driver_id) = request.current_driver_id {
            self.drivers
                .find_by_id(driver_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;
        }

        let vehicle = self
            .repository
            .update(
                id,
                request.registration_number,
                request.capacity_kg,
                request.vehicle_type,
                request.current_driver_id,
                request.status,
            )
            .await?;

        let with_load = self
            .repository
            .find_by_id_with_load(vehicle.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(with_load),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    /// Workflow de asignación: transiciona los bookings seleccionados
    /// a IN-TRANSIT y el vehículo a Assigned si al menos uno entró.
    pub async fn assign_bookings(
        &self,
        id: Uuid,
        request: AssignBookingsRequest,
    ) -> Result<ApiResponse<AssignmentResponse>, AppError> {
        // Validar datos de entrada
        request.validate().map_err(AppError::Validation)?;

        if request.booking_ids.is_empty() {
            return Err(AppError::ValidationError(
                "Debe seleccionar al menos un booking".to_string(),
            ));
        }

        let outcome = self
            .assignments
            .assign_bookings_to_vehicle(id, request.booking_ids)
            .await?;

        let message = format!(
            "{} bookings asignados, {} omitidos",
            outcome.assigned_count,
            outcome.skipped_booking_ids.len()
        );

        Ok(ApiResponse::success_with_message(outcome, message))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let vehicle = self
            .repository
            .find_by_id_with_load(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if vehicle.assigned_parcels > 0 {
            return Err(AppError::Conflict(
                "El vehículo tiene bookings en tránsito".to_string(),
            ));
        }

        self.repository.delete(id).await?;
        Ok(())
    }
}
