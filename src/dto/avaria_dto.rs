use serde::Deserialize;
use validator::Validate;

use crate::models::avaria::AvariaStatus;

/// Request para registrar uma avaria
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAvariaRequest {
    #[validate(length(min = 1))]
    pub motorista_id: String,

    #[validate(length(min = 1))]
    pub data_verificacao: String,

    #[validate(length(min = 1))]
    pub tipo_viatura: String,

    #[validate(length(min = 1))]
    pub placa: String,

    #[validate(range(min = 0))]
    pub km_atual: i64,

    #[validate(length(min = 1))]
    pub patrimonio: String,

    /// Lista ordenada de descrições; não pode ser vazia
    #[validate(length(min = 1))]
    pub problemas: Vec<String>,

    pub observacoes: Option<String>,

    #[validate(length(min = 1))]
    pub assinatura: String,
}

/// Request para sobrescrever o status de uma avaria.
///
/// Qualquer um dos quatro valores é aceito a partir de qualquer outro;
/// o tipo enum é o que garante que apenas valores válidos entram.
#[derive(Debug, Deserialize)]
pub struct UpdateAvariaStatusRequest {
    pub status: AvariaStatus,
}
