//! Controller de Empréstimos
//!
//! Cessão temporária de viaturas a condutores de outras unidades.
//! Nenhuma verificação de disponibilidade é feita contra outros
//! empréstimos ou registros de uso abertos: comportamento herdado e
//! mantido intencionalmente.

use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::emprestimo_dto::{CreateEmprestimoRequest, FinalizarEmprestimoRequest};
use crate::dto::{ApiResponse, CreatedResponse};
use crate::models::emprestimo::{Emprestimo, EmprestimoComViatura, EmprestimoStatus};
use crate::repositories::emprestimo_repository::EmprestimoRepository;
use crate::repositories::viatura_repository::ViaturaRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{parse_data, parse_hora};

pub struct EmprestimoController {
    repository: EmprestimoRepository,
    viatura_repository: ViaturaRepository,
}

impl EmprestimoController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: EmprestimoRepository::new(pool.clone()),
            viatura_repository: ViaturaRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateEmprestimoRequest,
    ) -> Result<CreatedResponse, AppError> {
        request.validate()?;

        self.viatura_repository
            .find_by_id(&request.viatura_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viatura não encontrada".to_string()))?;

        let data_inicial = parse_data("data_inicial", &request.data_inicial)?;
        let hora_inicial = parse_hora("hora_inicial", &request.hora_inicial)?;
        let data_final = parse_data("data_final", &request.data_final)?;
        let hora_final = parse_hora("hora_final", &request.hora_final)?;

        let emprestimo = self
            .repository
            .create(request, data_inicial, hora_inicial, data_final, hora_final)
            .await?;

        Ok(CreatedResponse::with_message(
            emprestimo.id,
            "Empréstimo registrado com sucesso".to_string(),
        ))
    }

    /// Finalizar um empréstimo ATIVO registrando a devolução
    pub async fn finalize(
        &self,
        id: &str,
        request: FinalizarEmprestimoRequest,
    ) -> Result<ApiResponse<()>, AppError> {
        request.validate()?;

        let emprestimo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Empréstimo não encontrado".to_string()))?;

        if emprestimo.status != EmprestimoStatus::Ativo {
            return Err(AppError::Conflict("Empréstimo já finalizado".to_string()));
        }

        if request.km_devolucao < emprestimo.km_inicial {
            return Err(AppError::InvalidOdometer(
                "KM de devolução não pode ser menor que KM inicial".to_string(),
            ));
        }

        let data_devolucao = parse_data("data_devolucao", &request.data_devolucao)?;
        let hora_devolucao = parse_hora("hora_devolucao", &request.hora_devolucao)?;

        self.repository
            .finalize(
                id,
                request.km_devolucao,
                data_devolucao,
                hora_devolucao,
                request.observacoes,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            (),
            "Empréstimo finalizado com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Emprestimo, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Empréstimo não encontrado".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<EmprestimoComViatura>, AppError> {
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
    use crate::dto::viatura_dto::CreateViaturaRequest;
    use crate::repositories::viatura_repository::ViaturaRepository;

    async fn setup() -> SqlitePool {
        let conn = DatabaseConnection::new("sqlite::memory:").await.unwrap();
        let pool = conn.pool().clone();
        run_migrations(&pool).await.unwrap();
        pool
    }

    async fn criar_viatura(pool: &SqlitePool) -> String {
        let repo = ViaturaRepository::new(pool.clone());
        let viatura = repo
            .create(CreateViaturaRequest {
                patrimonio: "VTR-200".to_string(),
                placa: "PM-0200".to_string(),
                tipo: "Sedan".to_string(),
                modelo: "Cronos".to_string(),
                ano: 2023,
                cor: "Prata".to_string(),
                locadora: None,
                numero_cartao: None,
                combustivel: "ETANOL".to_string(),
                saldo: Some(500.0),
                status: None,
                km_atual: Some(42_000),
                observacoes: None,
            })
            .await
            .unwrap();
        viatura.id
    }

    fn request_emprestimo(viatura_id: &str) -> CreateEmprestimoRequest {
        CreateEmprestimoRequest {
            condutor_grad: "SGT".to_string(),
            condutor_matricula: "98765".to_string(),
            condutor_nome: "Carlos Pereira".to_string(),
            condutor_cpf: "000.000.000-00".to_string(),
            condutor_unidade: "3º BPM".to_string(),
            condutor_telefone: Some("(81) 99999-9999".to_string()),
            viatura_id: viatura_id.to_string(),
            finalidade: "Apoio a operação conjunta".to_string(),
            data_inicial: "2025-03-15".to_string(),
            hora_inicial: "06:00".to_string(),
            data_final: "2025-03-16".to_string(),
            hora_final: "18:00".to_string(),
            km_inicial: 42_000,
            km_previsto: Some(42_400),
            observacoes: None,
            responsavel: "CAP ANDRADE".to_string(),
        }
    }

    #[tokio::test]
    async fn test_emprestimo_comeca_ativo() {
        let pool = setup().await;
        let viatura_id = criar_viatura(&pool).await;
        let controller = EmprestimoController::new(pool.clone());

        let response = controller
            .create(request_emprestimo(&viatura_id))
            .await
            .unwrap();

        let emprestimo = controller.get_by_id(&response.id).await.unwrap();
        assert_eq!(emprestimo.status, EmprestimoStatus::Ativo);
        assert!(emprestimo.km_devolucao.is_none());
    }

    #[tokio::test]
    async fn test_finalizar_registra_devolucao() {
        let pool = setup().await;
        let viatura_id = criar_viatura(&pool).await;
        let controller = EmprestimoController::new(pool.clone());

        let response = controller
            .create(request_emprestimo(&viatura_id))
            .await
            .unwrap();

        controller
            .finalize(
                &response.id,
                FinalizarEmprestimoRequest {
                    data_devolucao: "2025-03-16".to_string(),
                    hora_devolucao: "17:30".to_string(),
                    km_devolucao: 42_380,
                    observacoes: Some("Devolvida abastecida".to_string()),
                },
            )
            .await
            .unwrap();

        let emprestimo = controller.get_by_id(&response.id).await.unwrap();
        assert_eq!(emprestimo.status, EmprestimoStatus::Finalizado);
        assert_eq!(emprestimo.km_devolucao, Some(42_380));
        assert!(emprestimo.data_devolucao.is_some());
    }

    #[tokio::test]
    async fn test_finalizar_duas_vezes_conflita() {
        let pool = setup().await;
        let viatura_id = criar_viatura(&pool).await;
        let controller = EmprestimoController::new(pool.clone());

        let response = controller
            .create(request_emprestimo(&viatura_id))
            .await
            .unwrap();

        let request = || FinalizarEmprestimoRequest {
            data_devolucao: "2025-03-16".to_string(),
            hora_devolucao: "17:30".to_string(),
            km_devolucao: 42_100,
            observacoes: None,
        };

        controller.finalize(&response.id, request()).await.unwrap();
        let result = controller.finalize(&response.id, request()).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_finalizar_com_km_menor_falha() {
        let pool = setup().await;
        let viatura_id = criar_viatura(&pool).await;
        let controller = EmprestimoController::new(pool.clone());

        let response = controller
            .create(request_emprestimo(&viatura_id))
            .await
            .unwrap();

        let result = controller
            .finalize(
                &response.id,
                FinalizarEmprestimoRequest {
                    data_devolucao: "2025-03-16".to_string(),
                    hora_devolucao: "17:30".to_string(),
                    km_devolucao: 41_000,
                    observacoes: None,
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::InvalidOdometer(_))));

        let emprestimo = controller.get_by_id(&response.id).await.unwrap();
        assert_eq!(emprestimo.status, EmprestimoStatus::Ativo);
    }

    #[tokio::test]
    async fn test_criar_com_viatura_inexistente() {
        let pool = setup().await;
        let controller = EmprestimoController::new(pool.clone());

        let result = controller.create(request_emprestimo("nao-existe")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
