//! DTOs de consignatarios

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Consignee;

// Request para registrar un consignatario (queda PENDING)
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateConsigneeRequest {
    pub company_id: Uuid,

    #[validate(length(min = 2, max = 200))]
    pub name: String,

    #[validate(length(min = 5, max = 300))]
    pub address: String,

    pub city: Option<String>,
    pub pincode: Option<String>,
    pub contact_phone: Option<String>,
}

// Request para actualizar un consignatario ya decidido
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateConsigneeRequest {
    pub company_id: Uuid,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
    pub contact_phone: Option<String>,
}

// Request para aprobar un consignatario PENDING
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ApproveConsigneeRequest {
    #[validate(length(min = 1, max = 50))]
    pub consignee_number: String,
}

// Request para rechazar un consignatario PENDING
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RejectConsigneeRequest {
    #[validate(length(min = 1, max = 500))]
    pub reason: String,
}

// Response de consignatario
#[derive(Debug, Serialize)]
pub struct ConsigneeResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub pincode: Option<String>,
    pub contact_phone: Option<String>,
    pub status: String,
    pub consignee_number: Option<String>,
    pub rejection_reason: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Consignee> for ConsigneeResponse {
    fn from(consignee: Consignee) -> Self {
        Self {
            id: consignee.id,
            company_id: consignee.company_id,
            name: consignee.name,
            address: consignee.address,
            city: consignee.city,
            pincode: consignee.pincode,
            contact_phone: consignee.contact_phone,
            status: consignee.status,
            consignee_number: consignee.consignee_number,
            rejection_reason: consignee.rejection_reason,
            approved_at: consignee.approved_at,
            created_at: consignee.created_at,
        }
    }
}
