use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;

use crate::controllers::uso_viatura_controller::UsoViaturaController;
use crate::dto::uso_viatura_dto::{CreateUsoViaturaRequest, FecharUsoViaturaRequest};
use crate::dto::{ApiResponse, CreatedResponse};
use crate::models::uso_viatura::{UsoViatura, UsoViaturaComDetalhes};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_uso_viatura_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_uso_viatura))
        .route("/", get(list_uso_viaturas))
        .route("/:id", get(get_uso_viatura))
        .route("/:id/fechar", put(fechar_uso_viatura))
        .route("/:id/editar", put(editar_uso_viatura))
        .route("/:id", delete(delete_uso_viatura))
}

async fn create_uso_viatura(
    State(state): State<AppState>,
    Json(request): Json<CreateUsoViaturaRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let controller = UsoViaturaController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn fechar_uso_viatura(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<FecharUsoViaturaRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = UsoViaturaController::new(state.pool.clone());
    let response = controller.close(&id, request).await?;
    Ok(Json(response))
}

async fn editar_uso_viatura(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<FecharUsoViaturaRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = UsoViaturaController::new(state.pool.clone());
    let response = controller.edit(&id, request).await?;
    Ok(Json(response))
}

async fn get_uso_viatura(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UsoViatura>, AppError> {
    let controller = UsoViaturaController::new(state.pool.clone());
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}

async fn list_uso_viaturas(
    State(state): State<AppState>,
) -> Result<Json<Vec<UsoViaturaComDetalhes>>, AppError> {
    let controller = UsoViaturaController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn delete_uso_viatura(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = UsoViaturaController::new(state.pool.clone());
    controller.delete(&id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Registro de uso excluído com sucesso"
    })))
}
