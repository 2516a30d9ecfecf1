use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;

use crate::controllers::emprestimo_controller::EmprestimoController;
use crate::dto::emprestimo_dto::{CreateEmprestimoRequest, FinalizarEmprestimoRequest};
use crate::dto::{ApiResponse, CreatedResponse};
use crate::models::emprestimo::{Emprestimo, EmprestimoComViatura};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_emprestimo_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_emprestimo))
        .route("/", get(list_emprestimos))
        .route("/:id", get(get_emprestimo))
        .route("/:id/finalizar", put(finalizar_emprestimo))
        .route("/:id", delete(delete_emprestimo))
}

async fn create_emprestimo(
    State(state): State<AppState>,
    Json(request): Json<CreateEmprestimoRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let controller = EmprestimoController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn finalizar_emprestimo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<FinalizarEmprestimoRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = EmprestimoController::new(state.pool.clone());
    let response = controller.finalize(&id, request).await?;
    Ok(Json(response))
}

async fn get_emprestimo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Emprestimo>, AppError> {
    let controller = EmprestimoController::new(state.pool.clone());
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}

async fn list_emprestimos(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmprestimoComViatura>>, AppError> {
    let controller = EmprestimoController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn delete_emprestimo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = EmprestimoController::new(state.pool.clone());
    controller.delete(&id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Empréstimo excluído com sucesso"
    })))
}
