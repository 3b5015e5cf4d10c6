use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{
    BatchBookingRequest, BookingFilters, BookingResponse, CreateBookingRequest,
    UpdateBookingRequest,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/", get(list_bookings))
        .route("/batch", post(create_booking_batch))
        .route("/assignable", get(list_assignable_bookings))
        .route("/lr/:lr_number", get(get_booking_by_lr))
        .route("/:id", get(get_booking))
        .route("/:id", put(update_booking))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn create_booking_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchBookingRequest>,
) -> Result<Json<ApiResponse<Vec<BookingResponse>>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.create_batch(request).await?;
    Ok(Json(response))
}

async fn list_bookings(
    State(state): State<AppState>,
    Query(filters): Query<BookingFilters>,
) -> Result<Json<ApiResponse<Vec<BookingResponse>>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn list_assignable_bookings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<BookingResponse>>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list_assignable().await?;
    Ok(Json(response))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn get_booking_by_lr(
    State(state): State<AppState>,
    Path(lr_number): Path<String>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.get_by_lr(&lr_number).await?;
    Ok(Json(response))
}

async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBookingRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}
