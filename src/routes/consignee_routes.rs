use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::consignee_controller::ConsigneeController;
use crate::dto::consignee_dto::{
    ApproveConsigneeRequest, ConsigneeResponse, CreateConsigneeRequest, RejectConsigneeRequest,
    UpdateConsigneeRequest,
};
use crate::dto::{ApiResponse, CompanyScope};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_consignee_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_consignee))
        .route("/", get(list_consignees))
        .route("/pending", get(list_pending_consignees))
        .route("/approved", get(list_approved_consignees))
        .route("/:id", get(get_consignee))
        .route("/:id", put(update_consignee))
        .route("/:id", delete(delete_consignee))
        .route("/:id/approve", put(approve_consignee))
        .route("/:id/reject", put(reject_consignee))
}

async fn create_consignee(
    State(state): State<AppState>,
    Json(request): Json<CreateConsigneeRequest>,
) -> Result<Json<ApiResponse<ConsigneeResponse>>, AppError> {
    let controller = ConsigneeController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_consignees(
    State(state): State<AppState>,
    Query(scope): Query<CompanyScope>,
) -> Result<Json<ApiResponse<Vec<ConsigneeResponse>>>, AppError> {
    let controller = ConsigneeController::new(state.pool.clone());
    let response = controller.list_by_company(scope.company_id).await?;
    Ok(Json(response))
}

async fn list_pending_consignees(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ConsigneeResponse>>>, AppError> {
    let controller = ConsigneeController::new(state.pool.clone());
    let response = controller.list_pending().await?;
    Ok(Json(response))
}

async fn list_approved_consignees(
    State(state): State<AppState>,
    Query(scope): Query<CompanyScope>,
) -> Result<Json<ApiResponse<Vec<ConsigneeResponse>>>, AppError> {
    let controller = ConsigneeController::new(state.pool.clone());
    let response = controller.list_approved(scope.company_id).await?;
    Ok(Json(response))
}

async fn get_consignee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ConsigneeResponse>>, AppError> {
    let controller = ConsigneeController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_consignee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateConsigneeRequest>,
) -> Result<Json<ApiResponse<ConsigneeResponse>>, AppError> {
    let controller = ConsigneeController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn approve_consignee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ApproveConsigneeRequest>,
) -> Result<Json<ApiResponse<ConsigneeResponse>>, AppError> {
    let controller = ConsigneeController::new(state.pool.clone());
    let response = controller.approve(id, request).await?;
    Ok(Json(response))
}

async fn reject_consignee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RejectConsigneeRequest>,
) -> Result<Json<ApiResponse<ConsigneeResponse>>, AppError> {
    let controller = ConsigneeController::new(state.pool.clone());
    let response = controller.reject(id, request).await?;
    Ok(Json(response))
}

async fn delete_consignee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(scope): Query<CompanyScope>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ConsigneeController::new(state.pool.clone());
    controller.delete(id, scope.company_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Consignatario eliminado exitosamente"
    })))
}
