use crate::models::{Vehicle, VehicleWithLoad};
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        registration_number: String,
        capacity_kg: Decimal,
        vehicle_type: Option<String>,
        current_driver_id: Option<Uuid>,
    ) -> Result<Vehicle, AppError> {
        let id = Uuid::new_v4();

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, registration_number, capacity_kg, vehicle_type, current_driver_id, status, created_at)
            VALUES ($1, $2, $3, $4, $5, 'Available', $6)
            RETURNING *
            "#
        )
        .bind(id)
        .bind(registration_number)
        .bind(capacity_kg)
        .bind(vehicle_type)
        .bind(current_driver_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding vehicle: {}", e)))?;

        Ok(vehicle)
    }

    /// Listado con la carga IN-TRANSIT de cada vehículo. El conteo se
    /// calcula en vivo; el status guardado no se corrige aquí (la
    /// reconciliación de display la hace el DTO de respuesta).
    pub async fn list_with_load(&self) -> Result<Vec<VehicleWithLoad>, AppError> {
        let vehicles = sqlx::query_as::<_, VehicleWithLoad>(
            r#"
            SELECT v.id, v.registration_number, v.capacity_kg, v.vehicle_type,
                   v.current_driver_id, v.status, v.created_at,
                   COUNT(b.id) FILTER (WHERE b.status = 'IN-TRANSIT') AS assigned_parcels
            FROM vehicles v
            LEFT JOIN bookings b ON b.assigned_vehicle_id = v.id
            GROUP BY v.id
            ORDER BY v.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing vehicles: {}", e)))?;

        Ok(vehicles)
    }

    pub async fn find_by_id_with_load(&self, id: Uuid) -> Result<Option<VehicleWithLoad>, AppError> {
        let vehicle = sqlx::query_as::<_, VehicleWithLoad>(
            r#"
            SELECT v.id, v.registration_number, v.capacity_kg, v.vehicle_type,
                   v.current_driver_id, v.status, v.created_at,
                   COUNT(b.id) FILTER (WHERE b.status = 'IN-TRANSIT') AS assigned_parcels
            FROM vehicles v
            LEFT JOIN bookings b ON b.assigned_vehicle_id = v.id
            WHERE v.id = $1
            GROUP BY v.id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn registration_exists(&self, registration_number: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE registration_number = $1)",
        )
        .bind(registration_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking registration: {}", e)))?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        registration_number: Option<String>,
        capacity_kg: Option<Decimal>,
        vehicle_type: Option<String>,
        current_driver_id: Option<Uuid>,
        status: Option<String>,
    ) -> Result<Vehicle, AppError> {
        // Obtener vehículo actual
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET registration_number = $2, capacity_kg = $3, vehicle_type = $4,
                current_driver_id = $5, status = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(registration_number.unwrap_or(current.registration_number))
        .bind(capacity_kg.unwrap_or(current.capacity_kg))
        .bind(vehicle_type.or(current.vehicle_type))
        .bind(current_driver_id.or(current.current_driver_id))
        .bind(status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    /// Actualización directa de status, usada por el workflow de
    /// asignación tras transicionar los bookings.
    pub async fn set_status(&self, id: Uuid, status: &str) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "UPDATE vehicles SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating vehicle status: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting vehicle: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }
}
