use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::motorista_dto::{
    CreateMotoristaRequest, LoginRequest, MotoristaResponse, UpdateMotoristaRequest,
    VerificarRequest,
};
use crate::dto::{ApiResponse, CreatedResponse};
use crate::models::motorista::MotoristaStatus;
use crate::repositories::motorista_repository::MotoristaRepository;
use crate::utils::errors::AppError;

/// Cadastro e autenticação dos condutores. A senha é armazenada com
/// bcrypt e nunca volta nas respostas; a autorização se resume ao flag
/// `is_admin`.
pub struct MotoristaController {
    repository: MotoristaRepository,
}

impl MotoristaController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: MotoristaRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateMotoristaRequest,
    ) -> Result<CreatedResponse, AppError> {
        request.validate()?;

        let senha_hash = hash(&request.senha, DEFAULT_COST)?;

        let motorista = self
            .repository
            .create(
                &request.nome_completo,
                &request.nome_guerra,
                &request.graduacao,
                &request.matricula,
                request.codigo_condutor,
                request.cpf,
                request.telefone,
                request.email,
                &senha_hash,
                request.status.unwrap_or(MotoristaStatus::Ativo),
                request.is_admin.unwrap_or(false),
            )
            .await?;

        Ok(CreatedResponse::with_message(
            motorista.id,
            "Motorista cadastrado com sucesso".to_string(),
        ))
    }

    /// Login por matrícula e senha, apenas para motoristas ATIVOS
    pub async fn login(
        &self,
        request: LoginRequest,
    ) -> Result<ApiResponse<MotoristaResponse>, AppError> {
        request.validate()?;

        let motorista = self
            .repository
            .find_ativo_by_matricula(&request.matricula)
            .await?
            .ok_or_else(|| {
                AppError::Unauthorized("Matrícula ou senha incorretos".to_string())
            })?;

        if !verify(&request.senha, &motorista.senha)? {
            return Err(AppError::Unauthorized(
                "Matrícula ou senha incorretos".to_string(),
            ));
        }

        Ok(ApiResponse::success(MotoristaResponse::from(motorista)))
    }

    /// Verificação de matrícula para restauração de sessão do frontend
    pub async fn verify(
        &self,
        request: VerificarRequest,
    ) -> Result<MotoristaResponse, AppError> {
        request.validate()?;

        let motorista = self
            .repository
            .find_ativo_by_matricula(&request.matricula)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

        Ok(MotoristaResponse::from(motorista))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<MotoristaResponse, AppError> {
        let motorista = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Motorista não encontrado".to_string()))?;

        Ok(MotoristaResponse::from(motorista))
    }

    pub async fn list(&self) -> Result<Vec<MotoristaResponse>, AppError> {
        let motoristas = self.repository.find_all().await?;
        Ok(motoristas.into_iter().map(MotoristaResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: &str,
        request: UpdateMotoristaRequest,
    ) -> Result<ApiResponse<MotoristaResponse>, AppError> {
        request.validate()?;

        // Senha vazia é tratada como "não alterar"
        let senha_hash = match request.senha.as_deref() {
            Some(senha) if !senha.trim().is_empty() => Some(hash(senha, DEFAULT_COST)?),
            _ => None,
        };

        let motorista = self
            .repository
            .update(
                id,
                request.nome_completo,
                request.nome_guerra,
                request.graduacao,
                request.codigo_condutor,
                request.cpf,
                request.telefone,
                request.email,
                senha_hash,
                request.status,
                request.is_admin,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            MotoristaResponse::from(motorista),
            "Motorista atualizado com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::database::connection::{run_migrations, seed_default_admin};
    use crate::database::DatabaseConnection;

    async fn setup() -> SqlitePool {
        let conn = DatabaseConnection::new("sqlite::memory:").await.unwrap();
        let pool = conn.pool().clone();
        run_migrations(&pool).await.unwrap();
        pool
    }

    fn request_motorista(matricula: &str) -> CreateMotoristaRequest {
        CreateMotoristaRequest {
            nome_completo: "José Santos".to_string(),
            nome_guerra: "SANTOS".to_string(),
            graduacao: "SD".to_string(),
            matricula: matricula.to_string(),
            codigo_condutor: Some("C-10".to_string()),
            cpf: None,
            telefone: None,
            email: None,
            senha: "segredo1".to_string(),
            status: None,
            is_admin: None,
        }
    }

    #[tokio::test]
    async fn test_cadastro_e_login() {
        let pool = setup().await;
        let controller = MotoristaController::new(pool.clone());

        controller.create(request_motorista("11111")).await.unwrap();

        let response = controller
            .login(LoginRequest {
                matricula: "11111".to_string(),
                senha: "segredo1".to_string(),
            })
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.data.unwrap().nome_guerra, "SANTOS");
    }

    #[tokio::test]
    async fn test_login_senha_errada() {
        let pool = setup().await;
        let controller = MotoristaController::new(pool.clone());

        controller.create(request_motorista("22222")).await.unwrap();

        let result = controller
            .login(LoginRequest {
                matricula: "22222".to_string(),
                senha: "outra-senha".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_login_motorista_inativo() {
        let pool = setup().await;
        let controller = MotoristaController::new(pool.clone());

        let mut request = request_motorista("33333");
        request.status = Some(MotoristaStatus::Inativo);
        controller.create(request).await.unwrap();

        let result = controller
            .login(LoginRequest {
                matricula: "33333".to_string(),
                senha: "segredo1".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_matricula_duplicada_conflita() {
        let pool = setup().await;
        let controller = MotoristaController::new(pool.clone());

        controller.create(request_motorista("44444")).await.unwrap();
        let result = controller.create(request_motorista("44444")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_admin_padrao_criado_uma_unica_vez() {
        let pool = setup().await;

        seed_default_admin(&pool).await.unwrap();
        seed_default_admin(&pool).await.unwrap();

        let admins: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM motoristas WHERE is_admin = 1")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(admins, 1);

        let controller = MotoristaController::new(pool.clone());
        let response = controller
            .login(LoginRequest {
                matricula: "admin".to_string(),
                senha: "admin123".to_string(),
            })
            .await
            .unwrap();
        assert!(response.data.unwrap().is_admin);
    }

    #[tokio::test]
    async fn test_atualizar_sem_senha_preserva_login() {
        let pool = setup().await;
        let controller = MotoristaController::new(pool.clone());

        let created = controller.create(request_motorista("55555")).await.unwrap();

        controller
            .update(
                &created.id,
                UpdateMotoristaRequest {
                    nome_completo: None,
                    nome_guerra: Some("SANTOS II".to_string()),
                    graduacao: None,
                    codigo_condutor: None,
                    cpf: None,
                    telefone: None,
                    email: None,
                    senha: Some("".to_string()),
                    status: None,
                    is_admin: None,
                },
            )
            .await
            .unwrap();

        // Senha vazia não substitui a senha existente
        let response = controller
            .login(LoginRequest {
                matricula: "55555".to_string(),
                senha: "segredo1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.data.unwrap().nome_guerra, "SANTOS II");
    }
}
