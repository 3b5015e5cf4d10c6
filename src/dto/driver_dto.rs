//! DTOs de conductores

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Driver;

// Request para registrar un conductor
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateDriverRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    pub contact_phone: Option<String>,

    #[validate(length(min = 4, max = 30))]
    pub license_number: String,
}

// Request para actualizar un conductor
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateDriverRequest {
    pub name: Option<String>,
    pub contact_phone: Option<String>,
    pub license_number: Option<String>,
    pub status: Option<String>,
}

// Response de conductor
#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: Uuid,
    pub name: String,
    pub contact_phone: Option<String>,
    pub license_number: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name,
            contact_phone: driver.contact_phone,
            license_number: driver.license_number,
            status: driver.status,
            created_at: driver.created_at,
        }
    }
}
