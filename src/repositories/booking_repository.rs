use crate::dto::booking_dto::BookingFilters;
use crate::models::{Booking, BookingStatus};
use crate::utils::errors::{conflict_error, AppError};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

// Fila lista para insertar, con el pricing ya resuelto como snapshot
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub lr_number: String,
    pub booking_date: NaiveDate,
    pub company_id: Uuid,
    pub consignee_name: String,
    pub consignee_contact: Option<String>,
    pub consignee_address: Option<String>,
    pub origin: Option<String>,
    pub destination: String,
    pub destination_pincode: Option<String>,
    pub article_count: i32,
    pub parcel_type: String,
    pub weight: Option<Decimal>,
    pub per_article_rate: Decimal,
    pub total_amount: Decimal,
    pub grand_total: Decimal,
}

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_booking: NewBooking) -> Result<Booking, AppError> {
        let id = Uuid::new_v4();
        let lr_number = new_booking.lr_number.clone();

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (id, lr_number, booking_date, company_id, consignee_name,
                consignee_contact, consignee_address, origin, destination, destination_pincode,
                article_count, parcel_type, weight, per_article_rate, total_amount, grand_total,
                status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, 'BOOKED', $17)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(new_booking.lr_number)
        .bind(new_booking.booking_date)
        .bind(new_booking.company_id)
        .bind(new_booking.consignee_name)
        .bind(new_booking.consignee_contact)
        .bind(new_booking.consignee_address)
        .bind(new_booking.origin)
        .bind(new_booking.destination)
        .bind(new_booking.destination_pincode)
        .bind(new_booking.article_count)
        .bind(new_booking.parcel_type)
        .bind(new_booking.weight)
        .bind(new_booking.per_article_rate)
        .bind(new_booking.total_amount)
        .bind(new_booking.grand_total)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error(&lr_number, "Error creating booking", e))?;

        Ok(booking)
    }

    /// Inserta el lote completo en un solo INSERT multi-fila: o entran
    /// todas las filas o (si el insert falla) ninguna. No hay lógica de
    /// recuperación parcial.
    pub async fn create_batch(&self, rows: Vec<NewBooking>) -> Result<Vec<Booking>, AppError> {
        let now = Utc::now();
        let first_lr = rows
            .first()
            .map(|row| row.lr_number.clone())
            .unwrap_or_default();

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO bookings (id, lr_number, booking_date, company_id, consignee_name, \
             consignee_contact, consignee_address, origin, destination, destination_pincode, \
             article_count, parcel_type, weight, per_article_rate, total_amount, grand_total, \
             status, created_at) ",
        );

        builder.push_values(rows, |mut b, row| {
            b.push_bind(Uuid::new_v4())
                .push_bind(row.lr_number)
                .push_bind(row.booking_date)
                .push_bind(row.company_id)
                .push_bind(row.consignee_name)
                .push_bind(row.consignee_contact)
                .push_bind(row.consignee_address)
                .push_bind(row.origin)
                .push_bind(row.destination)
                .push_bind(row.destination_pincode)
                .push_bind(row.article_count)
                .push_bind(row.parcel_type)
                .push_bind(row.weight)
                .push_bind(row.per_article_rate)
                .push_bind(row.total_amount)
                .push_bind(row.grand_total)
                .push_bind(BookingStatus::Booked.as_str())
                .push_bind(now);
        });

        builder.push(" RETURNING *");

        let bookings = builder
            .build_query_as::<Booking>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| insert_error(&first_lr, "Error creating booking batch", e))?;

        Ok(bookings)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding booking: {}", e)))?;

        Ok(booking)
    }

    pub async fn find_by_lr_number(&self, lr_number: &str) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE lr_number = $1")
            .bind(lr_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::DatabaseError(format!("Error finding booking by LR number: {}", e))
            })?;

        Ok(booking)
    }

    pub async fn list(&self, filters: &BookingFilters) -> Result<Vec<Booking>, AppError> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT * FROM bookings WHERE 1=1");

        if let Some(company_id) = filters.company_id {
            builder.push(" AND company_id = ");
            builder.push_bind(company_id);
        }
        if let Some(status) = &filters.status {
            builder.push(" AND status = ");
            builder.push_bind(status.clone());
        }
        if let Some(date_from) = filters.date_from {
            builder.push(" AND booking_date >= ");
            builder.push_bind(date_from);
        }
        if let Some(date_to) = filters.date_to {
            builder.push(" AND booking_date <= ");
            builder.push_bind(date_to);
        }

        builder.push(" ORDER BY created_at DESC");

        if let Some(limit) = filters.limit {
            builder.push(" LIMIT ");
            builder.push_bind(limit);
        }
        if let Some(offset) = filters.offset {
            builder.push(" OFFSET ");
            builder.push_bind(offset);
        }

        let bookings = builder
            .build_query_as::<Booking>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error listing bookings: {}", e)))?;

        Ok(bookings)
    }

    /// Candidatos para el selector de asignación: BOOKED y sin vehículo.
    pub async fn find_assignable(&self) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings
            WHERE status = 'BOOKED' AND assigned_vehicle_id IS NULL
            ORDER BY booking_date ASC, created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing assignable bookings: {}", e)))?;

        Ok(bookings)
    }

    /// Transición BOOKED → IN-TRANSIT. El UPDATE condicionado es el
    /// guardián del ciclo de vida: un booking que ya no está BOOKED o
    /// ya tiene vehículo no matchea ninguna fila y devuelve None, sin
    /// tocar el estado existente.
    pub async fn assign_to_vehicle(
        &self,
        booking_id: Uuid,
        vehicle_id: Uuid,
        driver_id: Option<Uuid>,
    ) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET status = 'IN-TRANSIT', assigned_vehicle_id = $2, assigned_driver_id = $3
            WHERE id = $1 AND status = 'BOOKED' AND assigned_vehicle_id IS NULL
            RETURNING *
            "#,
        )
        .bind(booking_id)
        .bind(vehicle_id)
        .bind(driver_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error assigning booking: {}", e)))?;

        Ok(booking)
    }

    /// Transición IN-TRANSIT → DELIVERED. El assigned_vehicle_id se
    /// conserva como registro histórico de qué vehículo entregó.
    pub async fn mark_delivered(&self, booking_id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET status = 'DELIVERED', delivered_at = $2
            WHERE id = $1 AND status = 'IN-TRANSIT'
            RETURNING *
            "#,
        )
        .bind(booking_id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error marking booking delivered: {}", e)))?;

        Ok(booking)
    }
}

/// La única restricción UNIQUE de bookings es lr_number: una violación
/// de unicidad en el INSERT es un LR duplicado y sale como conflicto
/// (409), no como error de store.
fn insert_error(lr_number: &str, context: &str, e: sqlx::Error) -> AppError {
    match e.as_database_error() {
        Some(db) if db.is_unique_violation() => {
            conflict_error("Booking", "lr_number", lr_number)
        }
        _ => AppError::DatabaseError(format!("{}: {}", context, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    // El mismo error que devuelve Postgres al insertar un LR repetido
    #[derive(Debug)]
    struct DuplicateLr;

    impl fmt::Display for DuplicateLr {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(DatabaseError::message(self))
        }
    }

    impl StdError for DuplicateLr {}

    impl DatabaseError for DuplicateLr {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint \"bookings_lr_number_key\""
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed("23505"))
        }

        fn constraint(&self) -> Option<&str> {
            Some("bookings_lr_number_key")
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }
    }

    #[test]
    fn test_duplicate_lr_becomes_conflict() {
        let err = insert_error(
            "LR123-01",
            "Error creating booking batch",
            sqlx::Error::Database(Box::new(DuplicateLr)),
        );

        match err {
            AppError::Conflict(message) => assert!(message.contains("LR123-01")),
            other => panic!("esperaba Conflict, llegó {:?}", other),
        }
    }

    #[test]
    fn test_other_insert_errors_stay_database_errors() {
        let err = insert_error("LR123", "Error creating booking", sqlx::Error::RowNotFound);

        assert!(
            matches!(err, AppError::DatabaseError(ref m) if m.starts_with("Error creating booking"))
        );
    }
}
