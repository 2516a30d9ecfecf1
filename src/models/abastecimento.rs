//! Modelo de Abastecimento
//!
//! Mapeia a tabela `abastecimentos`. Um abastecimento é imutável depois
//! de criado; a exclusão é administrativa. O débito do saldo acontece
//! na mesma transação da inserção.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Abastecimento - mapeia a tabela `abastecimentos`
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Abastecimento {
    pub id: String,
    pub viatura_id: String,
    pub data_abastecimento: NaiveDate,
    pub hora_abastecimento: NaiveTime,
    pub km_abastecimento: i64,
    pub litros: f64,
    pub valor_total: f64,
    pub posto: String,
    pub combustivel: String,
    pub created_at: DateTime<Utc>,
}

/// Linha de listagem com os dados da viatura (LEFT JOIN)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AbastecimentoComViatura {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub abastecimento: Abastecimento,
    pub patrimonio: Option<String>,
    pub placa: Option<String>,
}
