//! Modelo de Uso de Viatura
//!
//! Mapeia a tabela `uso_viaturas`: o registro de saída e retorno de uma
//! viatura por um motorista ("mapa"). Estados possíveis: ABERTO e
//! FINALIZADO, nada mais. `fechado_em` é gravado uma única vez, no
//! fechamento, e ancora a janela de 20 minutos de edição dos dados
//! finais. Invariante: `km_final >= km_inicial` quando presente.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Status do registro de uso
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
pub enum UsoViaturaStatus {
    #[sqlx(rename = "ABERTO")]
    #[serde(rename = "ABERTO")]
    Aberto,
    #[sqlx(rename = "FINALIZADO")]
    #[serde(rename = "FINALIZADO")]
    Finalizado,
}

impl UsoViaturaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsoViaturaStatus::Aberto => "ABERTO",
            UsoViaturaStatus::Finalizado => "FINALIZADO",
        }
    }
}

/// Registro de uso - mapeia a tabela `uso_viaturas`
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UsoViatura {
    pub id: String,
    pub motorista_id: String,
    pub viatura_id: String,
    pub emprego_missao: String,
    pub data_inicial: NaiveDate,
    pub hora_inicial: NaiveTime,
    pub km_inicial: i64,
    pub data_final: Option<NaiveDate>,
    pub hora_final: Option<NaiveTime>,
    pub km_final: Option<i64>,
    pub observacoes: Option<String>,
    pub status: UsoViaturaStatus,
    pub fechado_em: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Linha de listagem com motorista e viatura (LEFT JOIN)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UsoViaturaComDetalhes {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub uso: UsoViatura,
    pub nome_guerra: Option<String>,
    pub graduacao: Option<String>,
    pub patrimonio: Option<String>,
    pub placa: Option<String>,
}
