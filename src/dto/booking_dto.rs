//! DTOs de bookings
//!
//! Requests de creación individual y por lote, actualización de
//! status/asignación y filtros de listado.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Booking;

// Request para crear un booking individual
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateBookingRequest {
    pub company_id: Uuid,

    #[validate(length(min = 1, max = 200))]
    pub consignee_name: String,

    pub consignee_contact: Option<String>,
    pub consignee_address: Option<String>,
    pub origin: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub destination: String,

    pub destination_pincode: Option<String>,

    #[validate(range(min = 1))]
    pub article_count: i32,

    pub parcel_type: Option<String>,
    pub weight: Option<Decimal>,
    pub booking_date: Option<NaiveDate>,
}

// Un parcel dentro de un lote
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchParcel {
    pub consignee_name: String,
    pub consignee_contact: Option<String>,
    pub consignee_address: Option<String>,
    pub origin: Option<String>,
    pub destination: String,
    pub destination_pincode: Option<String>,
    pub article_count: i32,
    pub parcel_type: Option<String>,
    pub weight: Option<Decimal>,
}

// Request para crear un lote de bookings bajo un prefijo LR común.
// Los parcels se validan uno por uno en el controller para reportar
// el índice del que falla.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct BatchBookingRequest {
    pub company_id: Uuid,

    #[validate(length(min = 3, max = 40))]
    pub lr_number: String,

    pub booking_date: Option<NaiveDate>,
    pub parcels: Vec<BatchParcel>,
}

// Request para actualizar status y/o asignación de un booking
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateBookingRequest {
    pub status: Option<String>,
    pub assigned_vehicle_id: Option<Uuid>,
    pub assigned_driver_id: Option<Uuid>,
}

// Filtros del listado de bookings
#[derive(Debug, Default, Deserialize)]
pub struct BookingFilters {
    pub company_id: Option<Uuid>,
    pub status: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// Response de booking
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
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
    pub status: String,
    pub assigned_vehicle_id: Option<Uuid>,
    pub assigned_driver_id: Option<Uuid>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            lr_number: booking.lr_number,
            booking_date: booking.booking_date,
            company_id: booking.company_id,
            consignee_name: booking.consignee_name,
            consignee_contact: booking.consignee_contact,
            consignee_address: booking.consignee_address,
            origin: booking.origin,
            destination: booking.destination,
            destination_pincode: booking.destination_pincode,
            article_count: booking.article_count,
            parcel_type: booking.parcel_type,
            weight: booking.weight,
            per_article_rate: booking.per_article_rate,
            total_amount: booking.total_amount,
            grand_total: booking.grand_total,
            status: booking.status,
            assigned_vehicle_id: booking.assigned_vehicle_id,
            assigned_driver_id: booking.assigned_driver_id,
            delivered_at: booking.delivered_at,
            created_at: booking.created_at,
        }
    }
}
