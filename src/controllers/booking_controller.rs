use crate::dto::booking_dto::{
    BatchBookingRequest, BookingFilters, BookingResponse, CreateBookingRequest,
    UpdateBookingRequest,
};
use crate::dto::ApiResponse;
use crate::models::BookingStatus;
use crate::repositories::BookingRepository;
use crate::services::{AssignmentService, BookingService};
use crate::utils::errors::AppError;
use crate::utils::validation;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct BookingController {
    service: BookingService,
    assignments: AssignmentService,
    repository: BookingRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            service: BookingService::new(pool.clone()),
            assignments: AssignmentService::new(pool.clone()),
            repository: BookingRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        // Validar datos de entrada
        request.validate().map_err(AppError::Validation)?;

        // Campos que el derive no cubre (strings en blanco, formato)
        if request.consignee_name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "El nombre del consignatario es requerido".to_string(),
            ));
        }
        if request.destination.trim().is_empty() {
            return Err(AppError::ValidationError(
                "El destino es requerido".to_string(),
            ));
        }
        if request.article_count <= 0 {
            return Err(AppError::ValidationError(
                "La cantidad de artículos debe ser mayor a cero".to_string(),
            ));
        }
        if let Some(pincode) = &request.destination_pincode {
            validation::validate_pincode(pincode).map_err(|_| {
                AppError::ValidationError(
                    "El pincode de destino debe tener 6 dígitos".to_string(),
                )
            })?;
        }

        let booking = self.service.create_booking(request).await?;

        Ok(ApiResponse::success_with_message(
            BookingResponse::from(booking),
            "Booking creado exitosamente".to_string(),
        ))
    }

    pub async fn create_batch(
        &self,
        request: BatchBookingRequest,
    ) -> Result<ApiResponse<Vec<BookingResponse>>, AppError> {
        // Validar datos de entrada
        request.validate().map_err(AppError::Validation)?;

        validation::validate_lr_prefix(&request.lr_number).map_err(|_| {
            AppError::ValidationError(
                "El prefijo LR debe ser 'LR' seguido de dígitos".to_string(),
            )
        })?;
        if request.parcels.is_empty() {
            return Err(AppError::ValidationError(
                "El lote debe incluir al menos un parcel".to_string(),
            ));
        }
        for (index, parcel) in request.parcels.iter().enumerate() {
            if parcel.consignee_name.trim().is_empty() {
                return Err(AppError::ValidationError(format!(
                    "El parcel {} no tiene nombre de consignatario",
                    index + 1
                )));
            }
            if parcel.destination.trim().is_empty() {
                return Err(AppError::ValidationError(format!(
                    "El parcel {} no tiene destino",
                    index + 1
                )));
            }
            if parcel.article_count <= 0 {
                return Err(AppError::ValidationError(format!(
                    "El parcel {} debe tener cantidad de artículos mayor a cero",
                    index + 1
                )));
            }
        }

        let bookings = self.service.create_batch(request).await?;
        let count = bookings.len();
        let response = bookings.into_iter().map(BookingResponse::from).collect();

        Ok(ApiResponse::success_with_message(
            response,
            format!("Lote de {} bookings creado exitosamente", count),
        ))
    }

    pub async fn list(
        &self,
        filters: BookingFilters,
    ) -> Result<ApiResponse<Vec<BookingResponse>>, AppError> {
        if let Some(status) = &filters.status {
            if BookingStatus::parse(status).is_none() {
                return Err(AppError::ValidationError(
                    "Status de booking inválido".to_string(),
                ));
            }
        }
        if matches!(filters.limit, Some(limit) if limit <= 0) {
            return Err(AppError::ValidationError(
                "El límite debe ser mayor a cero".to_string(),
            ));
        }
        if matches!(filters.offset, Some(offset) if offset < 0) {
            return Err(AppError::ValidationError(
                "El offset no puede ser negativo".to_string(),
            ));
        }

        let bookings = self.repository.list(&filters).await?;
        let response = bookings.into_iter().map(BookingResponse::from).collect();
        Ok(ApiResponse::success(response))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking no encontrado".to_string()))?;

        Ok(ApiResponse::success(BookingResponse::from(booking)))
    }

    /// Lookup por número LR, el identificador que viaja en el papel
    /// de la encomienda.
    pub async fn get_by_lr(
        &self,
        lr_number: &str,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self
            .repository
            .find_by_lr_number(lr_number)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking no encontrado".to_string()))?;

        Ok(ApiResponse::success(BookingResponse::from(booking)))
    }

    /// Candidatos del selector de asignación: solo BOOKED sin vehículo.
    pub async fn list_assignable(&self) -> Result<ApiResponse<Vec<BookingResponse>>, AppError> {
        let bookings = self.repository.find_assignable().await?;
        let response = bookings.into_iter().map(BookingResponse::from).collect();
        Ok(ApiResponse::success(response))
    }

    /// Actualización de status/asignación de un booking. Toda mutación
    /// de status pasa por las entradas del ciclo de vida: asignación
    /// (BOOKED → IN-TRANSIT) o entrega (IN-TRANSIT → DELIVERED).
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        match request.status.as_deref().map(BookingStatus::parse) {
            Some(Some(BookingStatus::InTransit)) => {
                let vehicle_id = request.assigned_vehicle_id.ok_or_else(|| {
                    AppError::ValidationError(
                        "Se requiere assigned_vehicle_id para pasar a IN-TRANSIT".to_string(),
                    )
                })?;
                let booking = self
                    .assignments
                    .assign_single(id, vehicle_id, request.assigned_driver_id)
                    .await?;
                Ok(ApiResponse::success_with_message(
                    BookingResponse::from(booking),
                    "Booking asignado exitosamente".to_string(),
                ))
            }
            Some(Some(BookingStatus::Delivered)) => {
                let booking = self.assignments.mark_delivered(id).await?;
                Ok(ApiResponse::success_with_message(
                    BookingResponse::from(booking),
                    "Booking marcado como entregado".to_string(),
                ))
            }
            Some(Some(BookingStatus::Booked)) => Err(AppError::ValidationError(
                "Transición de estado no permitida".to_string(),
            )),
            Some(None) => Err(AppError::ValidationError(
                "Status de booking inválido".to_string(),
            )),
            None => {
                // sin status explícito: asignación directa si viene el vehículo
                let vehicle_id = request.assigned_vehicle_id.ok_or_else(|| {
                    AppError::ValidationError("Nada que actualizar".to_string())
                })?;
                let booking = self
                    .assignments
                    .assign_single(id, vehicle_id, request.assigned_driver_id)
                    .await?;
                Ok(ApiResponse::success_with_message(
                    BookingResponse::from(booking),
                    "Booking asignado exitosamente".to_string(),
                ))
            }
        }
    }
}
