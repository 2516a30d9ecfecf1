//! Modelo de Empréstimo
//!
//! Mapeia a tabela `emprestimos`: viatura cedida temporariamente a um
//! condutor de outra unidade. Os dados do condutor externo são capturados
//! por valor (não há referência a `motoristas`). A finalização registra
//! o KM e a data/hora reais de devolução.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Status do empréstimo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
pub enum EmprestimoStatus {
    #[sqlx(rename = "ATIVO")]
    #[serde(rename = "ATIVO")]
    Ativo,
    #[sqlx(rename = "FINALIZADO")]
    #[serde(rename = "FINALIZADO")]
    Finalizado,
}

impl EmprestimoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmprestimoStatus::Ativo => "ATIVO",
            EmprestimoStatus::Finalizado => "FINALIZADO",
        }
    }
}

/// Empréstimo - mapeia a tabela `emprestimos`
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Emprestimo {
    pub id: String,
    pub condutor_grad: String,
    pub condutor_matricula: String,
    pub condutor_nome: String,
    pub condutor_cpf: String,
    pub condutor_unidade: String,
    pub condutor_telefone: Option<String>,
    pub viatura_id: String,
    pub finalidade: String,
    pub data_inicial: NaiveDate,
    pub hora_inicial: NaiveTime,
    pub data_final: NaiveDate,
    pub hora_final: NaiveTime,
    pub km_inicial: i64,
    pub km_previsto: Option<i64>,
    pub km_devolucao: Option<i64>,
    pub data_devolucao: Option<NaiveDate>,
    pub hora_devolucao: Option<NaiveTime>,
    pub observacoes: Option<String>,
    pub responsavel: String,
    pub status: EmprestimoStatus,
    pub created_at: DateTime<Utc>,
}

/// Linha de listagem com os dados da viatura (LEFT JOIN)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmprestimoComViatura {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub emprestimo: Emprestimo,
    pub patrimonio: Option<String>,
    pub placa: Option<String>,
}
