use serde::Deserialize;
use validator::Validate;

use crate::models::viatura::ViaturaStatus;

/// Request para cadastrar uma viatura
#[derive(Debug, Deserialize, Validate)]
pub struct CreateViaturaRequest {
    #[validate(length(min = 1))]
    pub patrimonio: String,

    #[validate(length(min = 1, max = 10))]
    pub placa: String,

    #[validate(length(min = 1))]
    pub tipo: String,

    #[validate(length(min = 1))]
    pub modelo: String,

    #[validate(range(min = 1990, max = 2035))]
    pub ano: i64,

    #[validate(length(min = 1))]
    pub cor: String,

    pub locadora: Option<String>,

    pub numero_cartao: Option<String>,

    #[validate(length(min = 1))]
    pub combustivel: String,

    #[validate(range(min = 0.0))]
    pub saldo: Option<f64>,

    pub status: Option<ViaturaStatus>,

    #[validate(range(min = 0))]
    pub km_atual: Option<i64>,

    pub observacoes: Option<String>,
}

/// Request para atualizar uma viatura; campos ausentes mantêm o valor atual
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateViaturaRequest {
    pub patrimonio: Option<String>,

    #[validate(length(min = 1, max = 10))]
    pub placa: Option<String>,

    pub tipo: Option<String>,
    pub modelo: Option<String>,

    #[validate(range(min = 1990, max = 2035))]
    pub ano: Option<i64>,

    pub cor: Option<String>,
    pub locadora: Option<String>,
    pub numero_cartao: Option<String>,
    pub combustivel: Option<String>,
    pub status: Option<ViaturaStatus>,

    #[validate(range(min = 0))]
    pub km_atual: Option<i64>,

    pub observacoes: Option<String>,
}

/// Request para crédito administrativo de saldo
#[derive(Debug, Deserialize, Validate)]
pub struct AdicionarSaldoRequest {
    #[validate(range(min = 0.01))]
    pub valor: f64,
}
