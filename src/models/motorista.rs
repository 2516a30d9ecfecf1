//! Modelo de Motorista
//!
//! Mapeia a tabela `motoristas`. A senha nunca é serializada
//! nas respostas da API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Status do motorista
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
pub enum MotoristaStatus {
    #[sqlx(rename = "ATIVO")]
    #[serde(rename = "ATIVO")]
    Ativo,
    #[sqlx(rename = "INATIVO")]
    #[serde(rename = "INATIVO")]
    Inativo,
    #[sqlx(rename = "FERIAS")]
    #[serde(rename = "FERIAS")]
    Ferias,
    #[sqlx(rename = "LICENCA")]
    #[serde(rename = "LICENCA")]
    Licenca,
}

impl MotoristaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotoristaStatus::Ativo => "ATIVO",
            MotoristaStatus::Inativo => "INATIVO",
            MotoristaStatus::Ferias => "FERIAS",
            MotoristaStatus::Licenca => "LICENCA",
        }
    }
}

/// Motorista - mapeia a tabela `motoristas`
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Motorista {
    pub id: String,
    pub nome_completo: String,
    pub nome_guerra: String,
    pub graduacao: String,
    pub matricula: String,
    pub codigo_condutor: Option<String>,
    pub cpf: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub senha: String,
    pub status: MotoristaStatus,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
