//! Sistema de tratamento de erros
//!
//! Este módulo define todos os tipos de erro do sistema
//! e sua conversão para respostas HTTP apropriadas.
//!
//! Erros de domínio (saldo insuficiente, KM inválido, janela de edição
//! expirada, conflito de escrita concorrente) retornam a mensagem
//! específica para o frontend reagir; falhas internas são logadas no
//! servidor e retornam uma mensagem genérica.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Erros principais da aplicação
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Saldo insuficiente para realizar este abastecimento")]
    InsufficientBalance,

    #[error("{0}")]
    InvalidOdometer(String),

    #[error("Período de edição expirado (limite de 20 minutos após o fechamento)")]
    EditWindowExpired,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(e: bcrypt::BcryptError) -> Self {
        AppError::Internal(format!("bcrypt: {}", e))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Internal(format!("serde_json: {}", e))
    }
}

/// Resposta de erro da API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: String,
}

impl ErrorResponse {
    fn new(error: &str, message: String, code: &str) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            message,
            details: None,
            code: code.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => {
                tracing::error!("Erro de banco de dados: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "Database Error",
                        "Ocorreu um erro ao acessar o banco de dados".to_string(),
                        "DB_ERROR",
                    ),
                )
            }

            AppError::Validation(e) => {
                tracing::warn!("Erro de validação: {}", e);
                let mut response = ErrorResponse::new(
                    "Validation Error",
                    "Os dados informados são inválidos".to_string(),
                    "VALIDATION_ERROR",
                );
                response.details = Some(json!(e));
                (StatusCode::BAD_REQUEST, response)
            }

            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("Not Found", msg, "NOT_FOUND"),
            ),

            AppError::Conflict(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse::new("Conflict", msg, "CONFLICT"),
            ),

            AppError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new("Unauthorized", msg, "UNAUTHORIZED"),
            ),

            AppError::InsufficientBalance => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new(
                    "Insufficient Balance",
                    "Saldo insuficiente para realizar este abastecimento".to_string(),
                    "SALDO_INSUFICIENTE",
                ),
            ),

            AppError::InvalidOdometer(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new("Invalid Odometer", msg, "KM_INVALIDO"),
            ),

            AppError::EditWindowExpired => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new(
                    "Edit Window Expired",
                    "Período de edição expirado (limite de 20 minutos após o fechamento)"
                        .to_string(),
                    "EDICAO_EXPIRADA",
                ),
            ),

            AppError::Internal(msg) => {
                tracing::error!("Erro interno: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "Internal Server Error",
                        "Ocorreu um erro inesperado".to_string(),
                        "INTERNAL_ERROR",
                    ),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operações que podem falhar
pub type AppResult<T> = Result<T, AppError>;

/// Helper para criar erros de validação de um campo específico
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Helper para criar erros de recurso não encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} com id '{}' não encontrado", resource, id))
}

/// Converter violação de unicidade em Conflict; demais erros viram Database
pub fn map_unique_violation(e: sqlx::Error, message: &str) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return AppError::Conflict(message.to_string());
        }
    }
    AppError::Database(e)
}
