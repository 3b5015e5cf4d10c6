use crate::models::Company;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        address: String,
        contact_person: String,
        contact_email: String,
        contact_phone: Option<String>,
        password_hash: String,
    ) -> Result<Company, AppError> {
        let id = Uuid::new_v4();

        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (id, name, address, contact_person, contact_email, contact_phone, password_hash, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'active', $8)
            RETURNING *
            "#
        )
        .bind(id)
        .bind(name)
        .bind(address)
        .bind(contact_person)
        .bind(contact_email)
        .bind(contact_phone)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating company: {}", e)))?;

        Ok(company)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, AppError> {
        let company = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding company: {}", e)))?;

        Ok(company)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Company>, AppError> {
        let company =
            sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE contact_email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::DatabaseError(format!("Error finding company by email: {}", e))
                })?;

        Ok(company)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM companies WHERE contact_email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error checking email: {}", e)))?;

        Ok(result.0)
    }

    pub async fn list(&self) -> Result<Vec<Company>, AppError> {
        let companies =
            sqlx::query_as::<_, Company>("SELECT * FROM companies ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error listing companies: {}", e)))?;

        Ok(companies)
    }
}
