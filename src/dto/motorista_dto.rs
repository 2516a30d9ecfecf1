use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::motorista::{Motorista, MotoristaStatus};

/// Request para cadastrar um motorista
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMotoristaRequest {
    #[validate(length(min = 1))]
    pub nome_completo: String,

    #[validate(length(min = 1))]
    pub nome_guerra: String,

    #[validate(length(min = 1))]
    pub graduacao: String,

    #[validate(length(min = 1))]
    pub matricula: String,

    pub codigo_condutor: Option<String>,

    pub cpf: Option<String>,

    pub telefone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 6))]
    pub senha: String,

    pub status: Option<MotoristaStatus>,

    pub is_admin: Option<bool>,
}

/// Request para atualizar um motorista; campos ausentes mantêm o valor atual
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMotoristaRequest {
    pub nome_completo: Option<String>,
    pub nome_guerra: Option<String>,
    pub graduacao: Option<String>,
    pub codigo_condutor: Option<String>,
    pub cpf: Option<String>,
    pub telefone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    /// Quando presente e não vazia, a senha é re-hasheada
    pub senha: Option<String>,

    pub status: Option<MotoristaStatus>,
    pub is_admin: Option<bool>,
}

/// Request de login por matrícula e senha
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub matricula: String,

    #[validate(length(min = 1))]
    pub senha: String,
}

/// Request de verificação de matrícula (restauração de sessão)
#[derive(Debug, Deserialize, Validate)]
pub struct VerificarRequest {
    #[validate(length(min = 1))]
    pub matricula: String,
}

/// Response de motorista (sem senha)
#[derive(Debug, Serialize)]
pub struct MotoristaResponse {
    pub id: String,
    pub nome_completo: String,
    pub nome_guerra: String,
    pub graduacao: String,
    pub matricula: String,
    pub codigo_condutor: Option<String>,
    pub cpf: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub status: MotoristaStatus,
    pub is_admin: bool,
}

impl From<Motorista> for MotoristaResponse {
    fn from(m: Motorista) -> Self {
        Self {
            id: m.id,
            nome_completo: m.nome_completo,
            nome_guerra: m.nome_guerra,
            graduacao: m.graduacao,
            matricula: m.matricula,
            codigo_condutor: m.codigo_condutor,
            cpf: m.cpf,
            telefone: m.telefone,
            email: m.email,
            status: m.status,
            is_admin: m.is_admin,
        }
    }
}
