use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;

use crate::controllers::viatura_controller::ViaturaController;
use crate::dto::viatura_dto::{
    AdicionarSaldoRequest, CreateViaturaRequest, UpdateViaturaRequest,
};
use crate::dto::{ApiResponse, CreatedResponse};
use crate::models::viatura::Viatura;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_viatura_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_viatura))
        .route("/", get(list_viaturas))
        .route("/:id", get(get_viatura))
        .route("/:id", put(update_viatura))
        .route("/:id/saldo", put(adicionar_saldo))
        .route("/:id", delete(delete_viatura))
}

async fn create_viatura(
    State(state): State<AppState>,
    Json(request): Json<CreateViaturaRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let controller = ViaturaController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_viatura(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Viatura>, AppError> {
    let controller = ViaturaController::new(state.pool.clone());
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}

async fn list_viaturas(
    State(state): State<AppState>,
) -> Result<Json<Vec<Viatura>>, AppError> {
    let controller = ViaturaController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_viatura(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateViaturaRequest>,
) -> Result<Json<ApiResponse<Viatura>>, AppError> {
    let controller = ViaturaController::new(state.pool.clone());
    let response = controller.update(&id, request).await?;
    Ok(Json(response))
}

async fn adicionar_saldo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AdicionarSaldoRequest>,
) -> Result<Json<ApiResponse<Viatura>>, AppError> {
    let controller = ViaturaController::new(state.pool.clone());
    let response = controller.add_saldo(&id, request).await?;
    Ok(Json(response))
}

async fn delete_viatura(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ViaturaController::new(state.pool.clone());
    controller.delete(&id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Viatura excluída com sucesso"
    })))
}
