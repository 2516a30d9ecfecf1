//! Modelo de Viatura
//!
//! Mapeia a tabela `viaturas`. O saldo é a conta corrente de combustível
//! da viatura: debitado a cada abastecimento e redefinido no reset mensal.
//! Nenhuma operação pode deixá-lo negativo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Status da viatura
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
pub enum ViaturaStatus {
    #[sqlx(rename = "ATIVA")]
    #[serde(rename = "ATIVA")]
    Ativa,
    #[sqlx(rename = "INATIVA")]
    #[serde(rename = "INATIVA")]
    Inativa,
    #[sqlx(rename = "MANUTENCAO")]
    #[serde(rename = "MANUTENCAO")]
    Manutencao,
    #[sqlx(rename = "RESERVA")]
    #[serde(rename = "RESERVA")]
    Reserva,
}

impl ViaturaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViaturaStatus::Ativa => "ATIVA",
            ViaturaStatus::Inativa => "INATIVA",
            ViaturaStatus::Manutencao => "MANUTENCAO",
            ViaturaStatus::Reserva => "RESERVA",
        }
    }
}

/// Viatura - mapeia a tabela `viaturas`
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Viatura {
    pub id: String,
    pub patrimonio: String,
    pub placa: String,
    pub tipo: String,
    pub modelo: String,
    pub ano: i64,
    pub cor: String,
    pub locadora: Option<String>,
    pub numero_cartao: Option<String>,
    pub combustivel: String,
    pub saldo: f64,
    pub status: ViaturaStatus,
    pub km_atual: i64,
    pub observacoes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
