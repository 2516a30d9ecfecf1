use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;

use crate::controllers::avaria_controller::AvariaController;
use crate::dto::avaria_dto::{CreateAvariaRequest, UpdateAvariaStatusRequest};
use crate::dto::{ApiResponse, CreatedResponse};
use crate::models::avaria::{Avaria, AvariaComMotorista};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_avaria_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_avaria))
        .route("/", get(list_avarias))
        .route("/:id", get(get_avaria))
        .route("/:id/status", put(update_avaria_status))
        .route("/:id", delete(delete_avaria))
}

async fn create_avaria(
    State(state): State<AppState>,
    Json(request): Json<CreateAvariaRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let controller = AvariaController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_avaria_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateAvariaStatusRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = AvariaController::new(state.pool.clone());
    let response = controller.update_status(&id, request).await?;
    Ok(Json(response))
}

async fn get_avaria(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Avaria>, AppError> {
    let controller = AvariaController::new(state.pool.clone());
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}

async fn list_avarias(
    State(state): State<AppState>,
) -> Result<Json<Vec<AvariaComMotorista>>, AppError> {
    let controller = AvariaController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn delete_avaria(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AvariaController::new(state.pool.clone());
    controller.delete(&id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Avaria excluída com sucesso"
    })))
}
