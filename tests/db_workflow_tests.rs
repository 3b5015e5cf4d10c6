//! Flujos completos contra un Postgres real.
//!
//! Cubren lo que el router con pool lazy no puede: el reemplazo de
//! tarjetas de tarifas, el conflicto de número de consignatario y el
//! workflow de asignación de punta a punta. Corren con
//! `cargo test -- --ignored` y DATABASE_URL apuntando a una base de
//! prueba; cada test siembra su propia compañía y trabaja solo con
//! sus filas.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use parcel_dispatch::controllers::{
    BookingController, ConsigneeController, RateCardController, VehicleController,
};
use parcel_dispatch::database::DatabaseConnection;
use parcel_dispatch::dto::booking_dto::{BatchBookingRequest, BatchParcel, CreateBookingRequest};
use parcel_dispatch::dto::consignee_dto::{ApproveConsigneeRequest, CreateConsigneeRequest};
use parcel_dispatch::dto::rate_card_dto::CreateRateCardRequest;
use parcel_dispatch::dto::vehicle_dto::CreateVehicleRequest;
use parcel_dispatch::repositories::{
    BookingRepository, CompanyRepository, ConsigneeRepository, RateCardRepository,
    VehicleRepository,
};
use parcel_dispatch::services::AssignmentService;
use parcel_dispatch::utils::errors::AppError;

#[tokio::test]
#[ignore] // requiere un Postgres alcanzable en DATABASE_URL
async fn test_new_rate_card_deactivates_prior_cards() {
    let pool = setup_pool().await;
    let company_id = seed_company(&pool).await;
    let controller = RateCardController::new(pool.clone());

    controller
        .create(CreateRateCardRequest {
            company_id,
            per_article_rate: Decimal::new(1200, 2),
            base_rate: None,
            effective_from: None,
        })
        .await
        .expect("primera tarjeta");

    controller
        .create(CreateRateCardRequest {
            company_id,
            per_article_rate: Decimal::new(1500, 2),
            base_rate: None,
            effective_from: None,
        })
        .await
        .expect("segunda tarjeta");

    let repository = RateCardRepository::new(pool);
    let history = repository
        .find_by_company(company_id)
        .await
        .expect("historial");
    assert_eq!(history.len(), 2);
    assert_eq!(history.iter().filter(|card| card.is_active).count(), 1);

    let active = repository
        .find_active_by_company(company_id)
        .await
        .expect("lookup de tarjeta activa")
        .expect("debe quedar una activa");
    assert_eq!(active.per_article_rate, Decimal::new(1500, 2));
}

#[tokio::test]
#[ignore] // requiere un Postgres alcanzable en DATABASE_URL
async fn test_active_rate_is_snapshotted_into_bookings() {
    let pool = setup_pool().await;
    let company_id = seed_company(&pool).await;

    RateCardController::new(pool.clone())
        .create(CreateRateCardRequest {
            company_id,
            per_article_rate: Decimal::new(1500, 2),
            base_rate: None,
            effective_from: None,
        })
        .await
        .expect("tarjeta de 15.00");

    let booking = BookingController::new(pool)
        .create(booking_request(company_id, "Almacenes Pioneros", 20))
        .await
        .expect("booking")
        .data
        .expect("payload");

    assert_eq!(booking.status, "BOOKED");
    assert!(booking.assigned_vehicle_id.is_none());
    assert_eq!(booking.per_article_rate, Decimal::new(1500, 2));
    assert_eq!(booking.total_amount, Decimal::new(30000, 2));
    assert_eq!(booking.grand_total, Decimal::new(30000, 2));
}

#[tokio::test]
#[ignore] // requiere un Postgres alcanzable en DATABASE_URL
async fn test_approve_with_taken_number_leaves_target_pending() {
    let pool = setup_pool().await;
    let company_id = seed_company(&pool).await;
    let controller = ConsigneeController::new(pool.clone());
    let numero = format!("CN-{}", Uuid::new_v4().simple());

    let primero = controller
        .create(consignee_request(company_id, "Distribuidora Norte"))
        .await
        .expect("alta del primero")
        .data
        .expect("payload");
    controller
        .approve(
            primero.id,
            ApproveConsigneeRequest {
                consignee_number: numero.clone(),
            },
        )
        .await
        .expect("aprobación del primero");

    let objetivo = controller
        .create(consignee_request(company_id, "Distribuidora Sur"))
        .await
        .expect("alta del objetivo")
        .data
        .expect("payload");

    let err = controller
        .approve(
            objetivo.id,
            ApproveConsigneeRequest {
                consignee_number: numero,
            },
        )
        .await
        .expect_err("número ocupado");
    assert!(matches!(err, AppError::Conflict(_)));

    // el objetivo no fue mutado por el intento fallido
    let fila = ConsigneeRepository::new(pool)
        .find_by_id(objetivo.id)
        .await
        .expect("lookup")
        .expect("sigue existiendo");
    assert_eq!(fila.status, "PENDING");
    assert!(fila.consignee_number.is_none());
    assert!(fila.approved_at.is_none());
}

#[tokio::test]
#[ignore] // requiere un Postgres alcanzable en DATABASE_URL
async fn test_assignment_moves_booking_to_transit_and_vehicle_to_assigned() {
    let pool = setup_pool().await;
    let company_id = seed_company(&pool).await;

    // sin tarjeta activa: el booking cotiza con la tarifa default
    let booking = BookingController::new(pool.clone())
        .create(booking_request(company_id, "Ferretería Central", 4))
        .await
        .expect("booking")
        .data
        .expect("payload");
    assert_eq!(booking.grand_total, Decimal::new(4000, 2));

    let vehicle = VehicleController::new(pool.clone())
        .create(CreateVehicleRequest {
            registration_number: unique_plate(),
            capacity_kg: Decimal::new(100000, 2),
            vehicle_type: None,
            current_driver_id: None,
        })
        .await
        .expect("vehículo")
        .data
        .expect("payload");

    let service = AssignmentService::new(pool.clone());
    let resultado = service
        .assign_bookings_to_vehicle(vehicle.id, vec![booking.id])
        .await
        .expect("asignación");
    assert_eq!(resultado.assigned_count, 1);
    assert!(resultado.skipped_booking_ids.is_empty());
    assert_eq!(resultado.vehicle_status, "Assigned");

    let stored_booking = BookingRepository::new(pool.clone())
        .find_by_id(booking.id)
        .await
        .expect("lookup de booking")
        .expect("existe");
    assert_eq!(stored_booking.status, "IN-TRANSIT");
    assert_eq!(stored_booking.assigned_vehicle_id, Some(vehicle.id));

    let stored_vehicle = VehicleRepository::new(pool)
        .find_by_id(vehicle.id)
        .await
        .expect("lookup de vehículo")
        .expect("existe");
    assert_eq!(stored_vehicle.status, "Assigned");

    // reintento: ya no está BOOKED, queda en omitidos sin doble conteo
    let repetido = service
        .assign_bookings_to_vehicle(vehicle.id, vec![booking.id])
        .await
        .expect("reintento");
    assert_eq!(repetido.assigned_count, 0);
    assert_eq!(repetido.skipped_booking_ids, vec![booking.id]);
}

#[tokio::test]
#[ignore] // requiere un Postgres alcanzable en DATABASE_URL
async fn test_batch_with_reused_prefix_is_a_conflict() {
    let pool = setup_pool().await;
    let company_id = seed_company(&pool).await;
    let controller = BookingController::new(pool);
    let prefijo = format!("LR{}", Utc::now().timestamp_millis());

    let primero = controller
        .create_batch(batch_request(company_id, &prefijo))
        .await
        .expect("primer lote")
        .data
        .expect("payload");
    assert_eq!(primero.len(), 2);
    assert_eq!(primero[0].lr_number, format!("{}-01", prefijo));

    let err = controller
        .create_batch(batch_request(company_id, &prefijo))
        .await
        .expect_err("prefijo repetido");
    assert!(matches!(err, AppError::Conflict(_)));
}

async fn setup_pool() -> PgPool {
    dotenvy::dotenv().ok();
    let connection = DatabaseConnection::new_default()
        .await
        .expect("conexión a Postgres de prueba");
    connection.run_migrations().await.expect("migraciones");
    connection.pool().clone()
}

async fn seed_company(pool: &PgPool) -> Uuid {
    let company = CompanyRepository::new(pool.clone())
        .create(
            "Transportes Integración".to_string(),
            "Av. Central 450".to_string(),
            "Coordinación".to_string(),
            format!("flota+{}@transportes.example", Uuid::new_v4().simple()),
            None,
            "$2b$12$hash-de-prueba".to_string(),
        )
        .await
        .expect("compañía de prueba");
    company.id
}

fn booking_request(company_id: Uuid, consignee: &str, article_count: i32) -> CreateBookingRequest {
    CreateBookingRequest {
        company_id,
        consignee_name: consignee.to_string(),
        consignee_contact: None,
        consignee_address: None,
        origin: None,
        destination: "Nagpur".to_string(),
        destination_pincode: None,
        article_count,
        parcel_type: None,
        weight: None,
        booking_date: None,
    }
}

fn consignee_request(company_id: Uuid, name: &str) -> CreateConsigneeRequest {
    CreateConsigneeRequest {
        company_id,
        name: name.to_string(),
        address: "Parque Industrial 77".to_string(),
        city: None,
        pincode: None,
        contact_phone: None,
    }
}

fn batch_request(company_id: Uuid, prefijo: &str) -> BatchBookingRequest {
    BatchBookingRequest {
        company_id,
        lr_number: prefijo.to_string(),
        booking_date: None,
        parcels: vec![
            BatchParcel {
                consignee_name: "Acme Distribuciones".to_string(),
                consignee_contact: None,
                consignee_address: None,
                origin: None,
                destination: "Pune".to_string(),
                destination_pincode: None,
                article_count: 2,
                parcel_type: None,
                weight: None,
            },
            BatchParcel {
                consignee_name: "Bodegas del Este".to_string(),
                consignee_contact: None,
                consignee_address: None,
                origin: None,
                destination: "Nashik".to_string(),
                destination_pincode: None,
                article_count: 3,
                parcel_type: None,
                weight: None,
            },
        ],
    }
}

// Matrícula única y válida para el formato de matrícula del sistema
fn unique_plate() -> String {
    let digits = (Uuid::new_v4().as_u128() % 10_000_000_000) as u64;
    format!("MH{:010}", digits)
}
