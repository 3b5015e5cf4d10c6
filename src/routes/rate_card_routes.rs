use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::rate_card_controller::RateCardController;
use crate::dto::rate_card_dto::{CreateRateCardRequest, RateCardResponse};
use crate::dto::{ApiResponse, CompanyScope};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rate_card_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_rate_card))
        .route("/", get(list_rate_cards))
        .route("/active", get(get_active_rate_card))
}

async fn create_rate_card(
    State(state): State<AppState>,
    Json(request): Json<CreateRateCardRequest>,
) -> Result<Json<ApiResponse<RateCardResponse>>, AppError> {
    let controller = RateCardController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_rate_cards(
    State(state): State<AppState>,
    Query(scope): Query<CompanyScope>,
) -> Result<Json<ApiResponse<Vec<RateCardResponse>>>, AppError> {
    let controller = RateCardController::new(state.pool.clone());
    let response = controller.list_by_company(scope.company_id).await?;
    Ok(Json(response))
}

async fn get_active_rate_card(
    State(state): State<AppState>,
    Query(scope): Query<CompanyScope>,
) -> Result<Json<ApiResponse<RateCardResponse>>, AppError> {
    let controller = RateCardController::new(state.pool.clone());
    let response = controller.get_active(scope.company_id).await?;
    Ok(Json(response))
}
