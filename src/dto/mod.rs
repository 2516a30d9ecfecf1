//! DTOs de requisição e resposta
//!
//! Um struct de requisição explícito por operação: payloads com campo
//! obrigatório ausente ou inválido são rejeitados com erro de validação
//! antes de qualquer escrita.

pub mod abastecimento_dto;
pub mod avaria_dto;
pub mod dashboard_dto;
pub mod emprestimo_dto;
pub mod motorista_dto;
pub mod uso_viatura_dto;
pub mod viatura_dto;

use serde::Serialize;

/// Resposta genérica da API
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

/// Resposta de criação - compatível com o frontend, que lê `id`
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CreatedResponse {
    pub fn new(id: String) -> Self {
        Self {
            success: true,
            id,
            message: None,
        }
    }

    pub fn with_message(id: String, message: String) -> Self {
        Self {
            success: true,
            id,
            message: Some(message),
        }
    }
}
