use serde::Deserialize;
use validator::Validate;

/// Request para abrir um registro de uso (saída da viatura)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUsoViaturaRequest {
    #[validate(length(min = 1))]
    pub motorista_id: String,

    #[validate(length(min = 1))]
    pub viatura_id: String,

    #[validate(length(min = 1))]
    pub emprego_missao: String,

    #[validate(length(min = 1))]
    pub data_inicial: String,

    #[validate(length(min = 1))]
    pub hora_inicial: String,

    #[validate(range(min = 0))]
    pub km_inicial: i64,

    pub observacoes: Option<String>,
}

/// Request para fechar o mapa ou editar os dados finais.
///
/// O mesmo payload serve para as duas operações; a edição só é aceita
/// dentro da janela de 20 minutos após o fechamento.
#[derive(Debug, Deserialize, Validate)]
pub struct FecharUsoViaturaRequest {
    #[validate(length(min = 1))]
    pub data_final: String,

    #[validate(length(min = 1))]
    pub hora_final: String,

    #[validate(range(min = 0))]
    pub km_final: i64,

    pub observacoes: Option<String>,
}
