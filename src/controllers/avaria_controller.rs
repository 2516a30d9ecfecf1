//! Controller de Avarias
//!
//! Registro e acompanhamento de defeitos reportados pelos motoristas.
//! O status é sobrescrito livremente pelos administradores entre os
//! quatro valores possíveis, sem ordem obrigatória.

use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::avaria_dto::{CreateAvariaRequest, UpdateAvariaStatusRequest};
use crate::dto::{ApiResponse, CreatedResponse};
use crate::models::avaria::{Avaria, AvariaComMotorista};
use crate::repositories::avaria_repository::AvariaRepository;
use crate::repositories::motorista_repository::MotoristaRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::parse_data;

pub struct AvariaController {
    repository: AvariaRepository,
    motorista_repository: MotoristaRepository,
}

impl AvariaController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: AvariaRepository::new(pool.clone()),
            motorista_repository: MotoristaRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateAvariaRequest) -> Result<CreatedResponse, AppError> {
        request.validate()?;

        if request.problemas.iter().any(|p| p.trim().is_empty()) {
            return Err(validation_error(
                "problemas",
                "descrições de problemas não podem ser vazias",
            ));
        }

        self.motorista_repository
            .find_by_id(&request.motorista_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Motorista não encontrado".to_string()))?;

        let data_verificacao = parse_data("data_verificacao", &request.data_verificacao)?;
        let problemas_json = serde_json::to_string(&request.problemas)?;

        let avaria = self
            .repository
            .create(
                &request.motorista_id,
                data_verificacao,
                &request.tipo_viatura,
                &request.placa,
                request.km_atual,
                &request.patrimonio,
                &problemas_json,
                request.observacoes,
                &request.assinatura,
            )
            .await?;

        Ok(CreatedResponse::with_message(
            avaria.id,
            "Avaria registrada com sucesso".to_string(),
        ))
    }

    pub async fn update_status(
        &self,
        id: &str,
        request: UpdateAvariaStatusRequest,
    ) -> Result<ApiResponse<()>, AppError> {
        self.repository.update_status(id, request.status).await?;

        Ok(ApiResponse::success_with_message(
            (),
            "Status da avaria atualizado".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Avaria, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Avaria não encontrada".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<AvariaComMotorista>, AppError> {
        self.repository.find_all().await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::database::connection::run_migrations;
    use crate::database::DatabaseConnection;
    use crate::models::avaria::AvariaStatus;

    async fn setup() -> SqlitePool {
        let conn = DatabaseConnection::new("sqlite::memory:").await.unwrap();
        let pool = conn.pool().clone();
        run_migrations(&pool).await.unwrap();
        pool
    }

    async fn criar_motorista(pool: &SqlitePool) -> String {
        let repo = crate::repositories::motorista_repository::MotoristaRepository::new(
            pool.clone(),
        );
        let motorista = repo
            .create(
                "Maria Souza",
                "SOUZA",
                "CB",
                "54321",
                None,
                None,
                None,
                None,
                "$2b$12$hash-de-teste",
                crate::models::motorista::MotoristaStatus::Ativo,
                false,
            )
            .await
            .unwrap();
        motorista.id
    }

    fn request_avaria(motorista_id: &str, problemas: Vec<&str>) -> CreateAvariaRequest {
        CreateAvariaRequest {
            motorista_id: motorista_id.to_string(),
            data_verificacao: "2025-03-12".to_string(),
            tipo_viatura: "SUV".to_string(),
            placa: "PM-0100".to_string(),
            km_atual: 10_500,
            patrimonio: "VTR-100".to_string(),
            problemas: problemas.into_iter().map(String::from).collect(),
            observacoes: None,
            assinatura: "SOUZA - CB".to_string(),
        }
    }

    #[tokio::test]
    async fn test_criar_avaria_comeca_pendente() {
        let pool = setup().await;
        let motorista_id = criar_motorista(&pool).await;
        let controller = AvariaController::new(pool.clone());

        let response = controller
            .create(request_avaria(&motorista_id, vec!["Ruído no freio"]))
            .await
            .unwrap();

        let avaria = controller.get_by_id(&response.id).await.unwrap();
        assert_eq!(avaria.status, AvariaStatus::Pendente);
        assert_eq!(
            avaria.lista_problemas().unwrap(),
            vec!["Ruído no freio".to_string()]
        );
    }

    #[tokio::test]
    async fn test_lista_de_problemas_vazia_rejeitada() {
        let pool = setup().await;
        let motorista_id = criar_motorista(&pool).await;
        let controller = AvariaController::new(pool.clone());

        let result = controller.create(request_avaria(&motorista_id, vec![])).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = controller
            .create(request_avaria(&motorista_id, vec!["  "]))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_status_aceita_salto_direto_para_resolvida() {
        let pool = setup().await;
        let motorista_id = criar_motorista(&pool).await;
        let controller = AvariaController::new(pool.clone());

        let response = controller
            .create(request_avaria(&motorista_id, vec!["Pneu careca", "Farol queimado"]))
            .await
            .unwrap();

        // Sem estados intermediários obrigatórios
        controller
            .update_status(
                &response.id,
                UpdateAvariaStatusRequest {
                    status: AvariaStatus::Resolvida,
                },
            )
            .await
            .unwrap();

        let avaria = controller.get_by_id(&response.id).await.unwrap();
        assert_eq!(avaria.status, AvariaStatus::Resolvida);
    }

    #[tokio::test]
    async fn test_excluir_inexistente_retorna_not_found() {
        let pool = setup().await;
        let controller = AvariaController::new(pool.clone());

        let result = controller.delete("nao-existe").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_problemas_preservam_ordem() {
        let pool = setup().await;
        let motorista_id = criar_motorista(&pool).await;
        let controller = AvariaController::new(pool.clone());

        let problemas = vec!["Freio", "Suspensão", "Embreagem"];
        let response = controller
            .create(request_avaria(&motorista_id, problemas.clone()))
            .await
            .unwrap();

        let avaria = controller.get_by_id(&response.id).await.unwrap();
        let lidos = avaria.lista_problemas().unwrap();
        assert_eq!(
            lidos,
            problemas.into_iter().map(String::from).collect::<Vec<_>>()
        );
    }
}
