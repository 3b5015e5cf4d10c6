//! DTOs del dashboard

use serde::Serialize;
use sqlx::FromRow;

// Conteos agregados de actividad para el dashboard. La cuenta de
// vehículos disponibles sigue la carga real, igual que el status
// derivado de los listados.
#[derive(Debug, Serialize, FromRow)]
pub struct DashboardSummary {
    pub total_bookings: i64,
    pub booked: i64,
    pub in_transit: i64,
    pub delivered: i64,
    pub pending_consignees: i64,
    pub total_vehicles: i64,
    pub available_vehicles: i64,
}
