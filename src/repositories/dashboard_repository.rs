use crate::dto::dashboard_dto::DashboardSummary;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Conteos agregados para el dashboard en una sola consulta. La
    /// disponibilidad de vehículos se deriva de la carga IN-TRANSIT
    /// real, no del status guardado (que puede quedar desactualizado).
    pub async fn summary(&self) -> Result<DashboardSummary, AppError> {
        let summary = sqlx::query_as::<_, DashboardSummary>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM bookings) AS total_bookings,
                (SELECT COUNT(*) FROM bookings WHERE status = 'BOOKED') AS booked,
                (SELECT COUNT(*) FROM bookings WHERE status = 'IN-TRANSIT') AS in_transit,
                (SELECT COUNT(*) FROM bookings WHERE status = 'DELIVERED') AS delivered,
                (SELECT COUNT(*) FROM consignees WHERE status = 'PENDING') AS pending_consignees,
                (SELECT COUNT(*) FROM vehicles) AS total_vehicles,
                (SELECT COUNT(*) FROM vehicles v WHERE NOT EXISTS (
                    SELECT 1 FROM bookings b
                    WHERE b.assigned_vehicle_id = v.id AND b.status = 'IN-TRANSIT'
                )) AS available_vehicles
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error loading dashboard summary: {}", e)))?;

        Ok(summary)
    }
}
