use serde::Deserialize;
use validator::Validate;

/// Request para registrar um empréstimo de viatura a outra unidade.
///
/// Os dados do condutor externo são capturados por valor: o condutor
/// não é um motorista do sistema.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmprestimoRequest {
    #[validate(length(min = 1))]
    pub condutor_grad: String,

    #[validate(length(min = 1))]
    pub condutor_matricula: String,

    #[validate(length(min = 1))]
    pub condutor_nome: String,

    #[validate(length(min = 1))]
    pub condutor_cpf: String,

    #[validate(length(min = 1))]
    pub condutor_unidade: String,

    pub condutor_telefone: Option<String>,

    #[validate(length(min = 1))]
    pub viatura_id: String,

    #[validate(length(min = 1))]
    pub finalidade: String,

    #[validate(length(min = 1))]
    pub data_inicial: String,

    #[validate(length(min = 1))]
    pub hora_inicial: String,

    #[validate(length(min = 1))]
    pub data_final: String,

    #[validate(length(min = 1))]
    pub hora_final: String,

    #[validate(range(min = 0))]
    pub km_inicial: i64,

    #[validate(range(min = 0))]
    pub km_previsto: Option<i64>,

    pub observacoes: Option<String>,

    #[validate(length(min = 1))]
    pub responsavel: String,
}

/// Request para finalizar um empréstimo ativo
#[derive(Debug, Deserialize, Validate)]
pub struct FinalizarEmprestimoRequest {
    #[validate(length(min = 1))]
    pub data_devolucao: String,

    #[validate(length(min = 1))]
    pub hora_devolucao: String,

    #[validate(range(min = 0))]
    pub km_devolucao: i64,

    pub observacoes: Option<String>,
}
