use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para registrar um abastecimento.
///
/// Operação NÃO idempotente: reenviar debita o saldo duas vezes.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAbastecimentoRequest {
    #[validate(length(min = 1))]
    pub viatura_id: String,

    #[validate(length(min = 1))]
    pub data_abastecimento: String,

    #[validate(length(min = 1))]
    pub hora_abastecimento: String,

    #[validate(range(min = 0))]
    pub km_abastecimento: i64,

    #[validate(range(min = 0.01))]
    pub litros: f64,

    #[validate(range(min = 0.01))]
    pub valor_total: f64,

    #[validate(length(min = 1))]
    pub posto: String,

    #[validate(length(min = 1))]
    pub combustivel: String,
}

/// Resultado da verificação do reset mensal de saldos
#[derive(Debug, Serialize)]
pub struct ResetMensalResponse {
    pub success: bool,
    /// true quando o reset foi executado nesta chamada
    pub executado: bool,
    pub message: String,
}
