//! Modelo de Avaria
//!
//! Mapeia a tabela `avarias`. Os dados da viatura (tipo, placa,
//! patrimônio) são desnormalizados no momento do registro. O campo
//! `problemas` guarda a lista ordenada de descrições serializada como
//! array JSON. O status é uma atribuição livre entre os quatro valores,
//! sem sequência obrigatória: um relatório pode ir de PENDENTE direto
//! para RESOLVIDA.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Status da avaria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
pub enum AvariaStatus {
    #[sqlx(rename = "PENDENTE")]
    #[serde(rename = "PENDENTE")]
    Pendente,
    #[sqlx(rename = "EM_ANALISE")]
    #[serde(rename = "EM_ANALISE")]
    EmAnalise,
    #[sqlx(rename = "EM_MANUTENCAO")]
    #[serde(rename = "EM_MANUTENCAO")]
    EmManutencao,
    #[sqlx(rename = "RESOLVIDA")]
    #[serde(rename = "RESOLVIDA")]
    Resolvida,
}

impl AvariaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvariaStatus::Pendente => "PENDENTE",
            AvariaStatus::EmAnalise => "EM_ANALISE",
            AvariaStatus::EmManutencao => "EM_MANUTENCAO",
            AvariaStatus::Resolvida => "RESOLVIDA",
        }
    }
}

/// Avaria - mapeia a tabela `avarias`
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Avaria {
    pub id: String,
    pub motorista_id: String,
    pub data_verificacao: NaiveDate,
    pub tipo_viatura: String,
    pub placa: String,
    pub km_atual: i64,
    pub patrimonio: String,
    /// Array JSON de descrições de problemas, na ordem informada
    pub problemas: String,
    pub observacoes: Option<String>,
    pub assinatura: String,
    pub status: AvariaStatus,
    pub created_at: DateTime<Utc>,
}

impl Avaria {
    /// Desserializar a lista de problemas
    pub fn lista_problemas(&self) -> Result<Vec<String>, serde_json::Error> {
        serde_json::from_str(&self.problemas)
    }
}

/// Linha de listagem com o motorista que reportou (LEFT JOIN)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AvariaComMotorista {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub avaria: Avaria,
    pub nome_guerra: Option<String>,
    pub graduacao: Option<String>,
}
