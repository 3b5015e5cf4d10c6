//! Orquestación de creación de bookings
//!
//! Junta la generación de LR numbers, la resolución de tarifa y el
//! snapshot de pricing antes de persistir. La creación por lote
//! resuelve la tarifa una sola vez y la reutiliza para todos los
//! parcels del lote.

use chrono::Utc;
use sqlx::PgPool;

use crate::dto::booking_dto::{BatchBookingRequest, CreateBookingRequest};
use crate::models::Booking;
use crate::repositories::{BookingRepository, NewBooking};
use crate::services::pricing_service::{compute_price, PricingService, DEFAULT_PER_ARTICLE_RATE};
use crate::utils::errors::AppResult;
use crate::utils::lr::{batch_lr_number, generate_lr_number};

pub struct BookingService {
    bookings: BookingRepository,
    pricing: PricingService,
}

impl BookingService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            bookings: BookingRepository::new(pool.clone()),
            pricing: PricingService::new(pool),
        }
    }

    /// Crea un booking individual en estado BOOKED con LR generado por
    /// timestamp y el pricing congelado al momento de la creación.
    pub async fn create_booking(&self, request: CreateBookingRequest) -> AppResult<Booking> {
        let rate = self
            .pricing
            .resolve_per_article_rate(request.company_id)
            .await?;

        let per_article_rate = rate.unwrap_or(*DEFAULT_PER_ARTICLE_RATE);
        let total_amount = compute_price(request.article_count, rate);

        let new_booking = NewBooking {
            lr_number: generate_lr_number(),
            booking_date: request.booking_date.unwrap_or_else(|| Utc::now().date_naive()),
            company_id: request.company_id,
            consignee_name: request.consignee_name,
            consignee_contact: request.consignee_contact,
            consignee_address: request.consignee_address,
            origin: request.origin,
            destination: request.destination,
            destination_pincode: request.destination_pincode,
            article_count: request.article_count,
            parcel_type: request.parcel_type.unwrap_or_else(|| "Standard".to_string()),
            weight: request.weight,
            per_article_rate,
            // grand_total = total_amount: sin impuestos ni recargos
            total_amount,
            grand_total: total_amount,
        };

        self.bookings.create(new_booking).await
    }

    /// Crea un lote completo bajo un prefijo LR común. La tarifa se
    /// resuelve una vez para todo el lote; cada parcel calcula su
    /// total con su propio article_count. El insert es un solo
    /// statement multi-fila: todo el lote entra o no entra nada.
    pub async fn create_batch(&self, request: BatchBookingRequest) -> AppResult<Vec<Booking>> {
        let rate = self
            .pricing
            .resolve_per_article_rate(request.company_id)
            .await?;

        let per_article_rate = rate.unwrap_or(*DEFAULT_PER_ARTICLE_RATE);
        let booking_date = request.booking_date.unwrap_or_else(|| Utc::now().date_naive());

        let rows: Vec<NewBooking> = request
            .parcels
            .into_iter()
            .enumerate()
            .map(|(index, parcel)| {
                let total_amount = compute_price(parcel.article_count, rate);
                NewBooking {
                    lr_number: batch_lr_number(&request.lr_number, index),
                    booking_date,
                    company_id: request.company_id,
                    consignee_name: parcel.consignee_name,
                    consignee_contact: parcel.consignee_contact,
                    consignee_address: parcel.consignee_address,
                    origin: parcel.origin,
                    destination: parcel.destination,
                    destination_pincode: parcel.destination_pincode,
                    article_count: parcel.article_count,
                    parcel_type: parcel.parcel_type.unwrap_or_else(|| "Standard".to_string()),
                    weight: parcel.weight,
                    per_article_rate,
                    total_amount,
                    grand_total: total_amount,
                }
            })
            .collect();

        self.bookings.create_batch(rows).await
    }
}
