//! Workflow de asignación de bookings a vehículos
//!
//! Orquesta las transiciones BOOKED → IN-TRANSIT de un conjunto de
//! bookings y la actualización del vehículo. Es best-effort: cada
//! booking se actualiza de forma independiente y un fallo en uno no
//! revierte los ya transicionados. El caller debe inspeccionar
//! assigned_count, no solo el flag de éxito.

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vehicle_dto::AssignmentResponse;
use crate::models::{Booking, BookingStatus, VehicleStatus};
use crate::repositories::{BookingRepository, VehicleRepository};
use crate::utils::errors::{AppError, AppResult};

pub struct AssignmentService {
    bookings: BookingRepository,
    vehicles: VehicleRepository,
}

impl AssignmentService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            bookings: BookingRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    /// Asigna un conjunto de bookings BOOKED al vehículo dado. Cada
    /// booking pasa por el UPDATE condicionado del repository: los que
    /// ya no están BOOKED (o ya tienen vehículo) se reportan en
    /// skipped_booking_ids sin tocar su estado. Si al menos uno
    /// transicionó, el vehículo pasa a "Assigned".
    pub async fn assign_bookings_to_vehicle(
        &self,
        vehicle_id: Uuid,
        booking_ids: Vec<Uuid>,
    ) -> AppResult<AssignmentResponse> {
        let vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let driver_id = vehicle.current_driver_id;
        let mut assigned_count = 0usize;
        let mut skipped_booking_ids = Vec::new();

        for booking_id in booking_ids {
            match self
                .bookings
                .assign_to_vehicle(booking_id, vehicle_id, driver_id)
                .await
            {
                Ok(Some(_)) => assigned_count += 1,
                Ok(None) => {
                    // no estaba BOOKED o ya tenía vehículo
                    skipped_booking_ids.push(booking_id);
                }
                Err(e) => {
                    log::warn!(
                        "No se pudo asignar el booking {} al vehículo {}: {}",
                        booking_id,
                        vehicle_id,
                        e
                    );
                    skipped_booking_ids.push(booking_id);
                }
            }
        }

        let vehicle_status = if assigned_count > 0 {
            let updated = self
                .vehicles
                .set_status(vehicle_id, VehicleStatus::Assigned.as_str())
                .await?;
            updated.status
        } else {
            vehicle.status
        };

        Ok(AssignmentResponse {
            assigned_count,
            skipped_booking_ids,
            vehicle_status,
        })
    }

    /// Asignación de un solo booking vía actualización directa.
    /// Distingue booking inexistente (not found) de booking no
    /// elegible (conflict). Sin override explícito, el conductor es el
    /// current_driver_id del vehículo.
    pub async fn assign_single(
        &self,
        booking_id: Uuid,
        vehicle_id: Uuid,
        driver_override: Option<Uuid>,
    ) -> AppResult<Booking> {
        let vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let current = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking no encontrado".to_string()))?;

        let eligible = current
            .booking_status()
            .map(|status| status.can_transition_to(BookingStatus::InTransit))
            .unwrap_or(false);
        if !eligible {
            return Err(AppError::Conflict(
                "El booking no está disponible para asignación".to_string(),
            ));
        }

        let driver_id = driver_override.or(vehicle.current_driver_id);

        // El UPDATE condicionado vuelve a verificar el estado; el
        // chequeo de arriba solo da un error temprano más claro.
        let booking = self
            .bookings
            .assign_to_vehicle(booking_id, vehicle_id, driver_id)
            .await?
            .ok_or_else(|| {
                AppError::Conflict("El booking no está disponible para asignación".to_string())
            })?;

        self.vehicles
            .set_status(vehicle_id, VehicleStatus::Assigned.as_str())
            .await?;

        Ok(booking)
    }

    /// Marca un booking IN-TRANSIT como DELIVERED. El estado del
    /// vehículo no se toca aquí: el status guardado puede quedar
    /// desactualizado hasta el próximo listado, que lo reconcilia
    /// solo en display.
    pub async fn mark_delivered(&self, booking_id: Uuid) -> AppResult<Booking> {
        let current = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking no encontrado".to_string()))?;

        let eligible = current
            .booking_status()
            .map(|status| status.can_transition_to(BookingStatus::Delivered))
            .unwrap_or(false);
        if !eligible {
            return Err(AppError::Conflict(
                "El booking no está en tránsito".to_string(),
            ));
        }

        self.bookings
            .mark_delivered(booking_id)
            .await?
            .ok_or_else(|| AppError::Conflict("El booking no está en tránsito".to_string()))
    }
}
