use crate::models::{Consignee, ConsigneeStatus};
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ConsigneeRepository {
    pool: PgPool,
}

impl ConsigneeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        name: String,
        address: String,
        city: Option<String>,
        pincode: Option<String>,
        contact_phone: Option<String>,
    ) -> Result<Consignee, AppError> {
        let id = Uuid::new_v4();

        // La aplicación siempre inserta PENDING explícito; el default
        // APPROVED del schema solo cubre filas legacy.
        let consignee = sqlx::query_as::<_, Consignee>(
            r#"
            INSERT INTO consignees (id, company_id, name, address, city, pincode, contact_phone, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'PENDING', $8)
            RETURNING *
            "#
        )
        .bind(id)
        .bind(company_id)
        .bind(name)
        .bind(address)
        .bind(city)
        .bind(pincode)
        .bind(contact_phone)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating consignee: {}", e)))?;

        Ok(consignee)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Consignee>, AppError> {
        let consignee = sqlx::query_as::<_, Consignee>("SELECT * FROM consignees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding consignee: {}", e)))?;

        Ok(consignee)
    }

    pub async fn find_by_company(&self, company_id: Uuid) -> Result<Vec<Consignee>, AppError> {
        let consignees = sqlx::query_as::<_, Consignee>(
            "SELECT * FROM consignees WHERE company_id = $1 ORDER BY created_at DESC",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing consignees: {}", e)))?;

        Ok(consignees)
    }

    /// Cola de revisión del admin: todos los PENDING de todas las compañías.
    pub async fn find_pending(&self) -> Result<Vec<Consignee>, AppError> {
        let consignees = sqlx::query_as::<_, Consignee>(
            "SELECT * FROM consignees WHERE status = 'PENDING' ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing pending consignees: {}", e)))?;

        Ok(consignees)
    }

    /// Consignatarios elegibles para bookings de una compañía.
    pub async fn find_approved_by_company(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<Consignee>, AppError> {
        let consignees = sqlx::query_as::<_, Consignee>(
            "SELECT * FROM consignees WHERE company_id = $1 AND status = 'APPROVED' ORDER BY name ASC",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("Error listing approved consignees: {}", e))
        })?;

        Ok(consignees)
    }

    /// Pre-check de unicidad del número de consignatario. El índice
    /// único parcial del schema es el backstop frente a aprobaciones
    /// concurrentes que pasen este check a la vez.
    pub async fn number_taken(&self, consignee_number: &str, exclude_id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM consignees WHERE consignee_number = $1 AND id <> $2)",
        )
        .bind(consignee_number)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking consignee number: {}", e)))?;

        Ok(result.0)
    }

    /// Aprueba un consignatario PENDING. El UPDATE condicionado hace
    /// cumplir el workflow: si el target ya fue decidido no matchea
    /// ninguna fila y se devuelve None.
    pub async fn approve(
        &self,
        id: Uuid,
        consignee_number: String,
    ) -> Result<Option<Consignee>, AppError> {
        let consignee = sqlx::query_as::<_, Consignee>(
            r#"
            UPDATE consignees
            SET status = 'APPROVED', consignee_number = $2, approved_at = $3
            WHERE id = $1 AND status = 'PENDING'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(consignee_number)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error approving consignee: {}", e)))?;

        Ok(consignee)
    }

    /// Rechaza un consignatario PENDING con el motivo dado.
    pub async fn reject(&self, id: Uuid, reason: String) -> Result<Option<Consignee>, AppError> {
        let consignee = sqlx::query_as::<_, Consignee>(
            r#"
            UPDATE consignees
            SET status = 'REJECTED', rejection_reason = $2, approved_at = $3
            WHERE id = $1 AND status = 'PENDING'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(reason)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error rejecting consignee: {}", e)))?;

        Ok(consignee)
    }

    /// Edición por la compañía dueña, solo sobre consignatarios ya
    /// decididos (los PENDING quedan intocables hasta la revisión).
    pub async fn update(
        &self,
        id: Uuid,
        company_id: Uuid,
        name: Option<String>,
        address: Option<String>,
        city: Option<String>,
        pincode: Option<String>,
        contact_phone: Option<String>,
    ) -> Result<Option<Consignee>, AppError> {
        let current = match self.find_by_id(id).await? {
            Some(c)
                if c.company_id == company_id
                    && c.consignee_status().map_or(true, |s| !s.is_decidable()) =>
            {
                c
            }
            _ => return Ok(None),
        };

        let consignee = sqlx::query_as::<_, Consignee>(
            r#"
            UPDATE consignees
            SET name = $2, address = $3, city = $4, pincode = $5, contact_phone = $6
            WHERE id = $1 AND status <> 'PENDING'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(address.unwrap_or(current.address))
        .bind(city.or(current.city))
        .bind(pincode.or(current.pincode))
        .bind(contact_phone.or(current.contact_phone))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating consignee: {}", e)))?;

        Ok(consignee)
    }

    /// Borrado por la compañía dueña, solo sobre consignatarios ya decididos.
    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            "DELETE FROM consignees WHERE id = $1 AND company_id = $2 AND status <> 'PENDING'",
        )
        .bind(id)
        .bind(company_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error deleting consignee: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
