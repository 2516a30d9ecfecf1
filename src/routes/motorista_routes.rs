use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;

use crate::controllers::motorista_controller::MotoristaController;
use crate::dto::motorista_dto::{
    CreateMotoristaRequest, LoginRequest, MotoristaResponse, UpdateMotoristaRequest,
    VerificarRequest,
};
use crate::dto::{ApiResponse, CreatedResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_motorista_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_motorista))
        .route("/", get(list_motoristas))
        .route("/login", post(login))
        .route("/verificar", post(verificar))
        .route("/:id", get(get_motorista))
        .route("/:id", put(update_motorista))
        .route("/:id", delete(delete_motorista))
}

async fn create_motorista(
    State(state): State<AppState>,
    Json(request): Json<CreateMotoristaRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<MotoristaResponse>>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let response = controller.login(request).await?;
    Ok(Json(response))
}

async fn verificar(
    State(state): State<AppState>,
    Json(request): Json<VerificarRequest>,
) -> Result<Json<MotoristaResponse>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let response = controller.verify(request).await?;
    Ok(Json(response))
}

async fn get_motorista(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MotoristaResponse>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}

async fn list_motoristas(
    State(state): State<AppState>,
) -> Result<Json<Vec<MotoristaResponse>>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_motorista(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateMotoristaRequest>,
) -> Result<Json<ApiResponse<MotoristaResponse>>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let response = controller.update(&id, request).await?;
    Ok(Json(response))
}

async fn delete_motorista(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    controller.delete(&id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Motorista excluído com sucesso"
    })))
}
