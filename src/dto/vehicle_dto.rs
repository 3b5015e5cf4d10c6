//! DTOs de vehículos y del workflow de asignación

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{derive_display_status, VehicleWithLoad};

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 5, max = 20))]
    pub registration_number: String,

    pub capacity_kg: Decimal,
    pub vehicle_type: Option<String>,
    pub current_driver_id: Option<Uuid>,
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 5, max = 20))]
    pub registration_number: Option<String>,

    pub capacity_kg: Option<Decimal>,
    pub vehicle_type: Option<String>,
    pub current_driver_id: Option<Uuid>,
    pub status: Option<String>,
}

// Request del workflow de asignación de bookings a un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AssignBookingsRequest {
    #[validate(length(min = 1))]
    pub booking_ids: Vec<Uuid>,
}

// Resultado del workflow de asignación (best-effort: el caller debe
// inspeccionar assigned_count, no solo el flag de éxito)
#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub assigned_count: usize,
    pub skipped_booking_ids: Vec<Uuid>,
    pub vehicle_status: String,
}

// Response de vehículo con el status derivado y la carga actual
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub registration_number: String,
    pub capacity_kg: Decimal,
    pub vehicle_type: Option<String>,
    pub current_driver_id: Option<Uuid>,
    pub status: String,
    pub assigned_parcels: i64,
    pub created_at: DateTime<Utc>,
}

impl From<VehicleWithLoad> for VehicleResponse {
    fn from(vehicle: VehicleWithLoad) -> Self {
        let status = derive_display_status(&vehicle.status, vehicle.assigned_parcels);
        Self {
            id: vehicle.id,
            registration_number: vehicle.registration_number,
            capacity_kg: vehicle.capacity_kg,
            vehicle_type: vehicle.vehicle_type,
            current_driver_id: vehicle.current_driver_id,
            status,
            assigned_parcels: vehicle.assigned_parcels,
            created_at: vehicle.created_at,
        }
    }
}
