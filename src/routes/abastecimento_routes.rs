use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;

use crate::controllers::abastecimento_controller::AbastecimentoController;
use crate::dto::abastecimento_dto::{CreateAbastecimentoRequest, ResetMensalResponse};
use crate::dto::CreatedResponse;
use crate::models::abastecimento::{Abastecimento, AbastecimentoComViatura};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_abastecimento_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_abastecimento))
        .route("/", get(list_abastecimentos))
        .route("/verificar-reset", post(verificar_reset_mensal))
        .route("/:id", get(get_abastecimento))
        .route("/:id", delete(delete_abastecimento))
}

async fn create_abastecimento(
    State(state): State<AppState>,
    Json(request): Json<CreateAbastecimentoRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let controller = AbastecimentoController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

/// Gatilho do reset mensal de saldos; idempotente dentro do mês
async fn verificar_reset_mensal(
    State(state): State<AppState>,
) -> Result<Json<ResetMensalResponse>, AppError> {
    let controller = AbastecimentoController::new(state.pool.clone());
    let response = controller
        .check_monthly_reset(state.config.saldo_mensal)
        .await?;
    Ok(Json(response))
}

async fn get_abastecimento(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Abastecimento>, AppError> {
    let controller = AbastecimentoController::new(state.pool.clone());
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}

async fn list_abastecimentos(
    State(state): State<AppState>,
) -> Result<Json<Vec<AbastecimentoComViatura>>, AppError> {
    let controller = AbastecimentoController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn delete_abastecimento(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AbastecimentoController::new(state.pool.clone());
    controller.delete(&id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Abastecimento excluído com sucesso"
    })))
}
