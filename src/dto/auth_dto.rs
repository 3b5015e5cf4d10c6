//! DTOs de autenticación y compañías

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Company;

// Request para registrar una compañía
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RegisterCompanyRequest {
    #[validate(length(min = 2, max = 150))]
    pub name: String,

    #[validate(length(min = 5, max = 300))]
    pub address: String,

    #[validate(length(min = 2, max = 100))]
    pub contact_person: String,

    pub contact_email: String,
    pub contact_phone: Option<String>,

    #[validate(length(min = 8, max = 100))]
    pub password: String,
}

// Request de login
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

// Response de compañía (sin password)
#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub contact_person: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            address: company.address,
            contact_person: company.contact_person,
            contact_email: company.contact_email,
            contact_phone: company.contact_phone,
            status: company.status,
            created_at: company.created_at,
        }
    }
}

// Response de login con token JWT
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub company: CompanyResponse,
}
