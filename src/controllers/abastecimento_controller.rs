//! Controller de Abastecimentos
//!
//! Mantém o saldo de combustível de cada viatura: débito no registro do
//! abastecimento e reset mensal para o valor configurado. O registro não
//! é idempotente - reenviar a mesma requisição debita o saldo duas vezes.

use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::abastecimento_dto::{CreateAbastecimentoRequest, ResetMensalResponse};
use crate::dto::CreatedResponse;
use crate::models::abastecimento::{Abastecimento, AbastecimentoComViatura};
use crate::repositories::abastecimento_repository::AbastecimentoRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{parse_data, parse_hora};

pub struct AbastecimentoController {
    repository: AbastecimentoRepository,
}

impl AbastecimentoController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: AbastecimentoRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateAbastecimentoRequest,
    ) -> Result<CreatedResponse, AppError> {
        request.validate()?;

        let data = parse_data("data_abastecimento", &request.data_abastecimento)?;
        let hora = parse_hora("hora_abastecimento", &request.hora_abastecimento)?;

        let abastecimento = self
            .repository
            .create(
                &request.viatura_id,
                data,
                hora,
                request.km_abastecimento,
                request.litros,
                request.valor_total,
                &request.posto,
                &request.combustivel,
            )
            .await?;

        Ok(CreatedResponse::with_message(
            abastecimento.id,
            "Abastecimento registrado com sucesso".to_string(),
        ))
    }

    /// Verificar e, se necessário, executar o reset mensal de saldos
    pub async fn check_monthly_reset(
        &self,
        valor_reset: f64,
    ) -> Result<ResetMensalResponse, AppError> {
        let executado = self
            .repository
            .check_monthly_reset(valor_reset, Utc::now())
            .await?;

        let message = if executado {
            format!("Saldos mensais redefinidos para R$ {:.2}", valor_reset)
        } else {
            "Reset mensal já executado neste mês".to_string()
        };

        Ok(ResetMensalResponse {
            success: true,
            executado,
            message,
        })
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Abastecimento, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Abastecimento não encontrado".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<AbastecimentoComViatura>, AppError> {
        self.repository.find_all().await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

    use crate::database::connection::run_migrations;
    use crate::database::DatabaseConnection;
    use crate::dto::viatura_dto::CreateViaturaRequest;
    use crate::repositories::abastecimento_repository::AbastecimentoRepository;
    use crate::repositories::viatura_repository::ViaturaRepository;

    async fn setup() -> SqlitePool {
        let conn = DatabaseConnection::new("sqlite::memory:").await.unwrap();
        let pool = conn.pool().clone();
        run_migrations(&pool).await.unwrap();
        pool
    }

    async fn criar_viatura(pool: &SqlitePool, patrimonio: &str, saldo: f64) -> String {
        criar_viatura_com_status(pool, patrimonio, saldo, None).await
    }

    async fn criar_viatura_com_status(
        pool: &SqlitePool,
        patrimonio: &str,
        saldo: f64,
        status: Option<crate::models::viatura::ViaturaStatus>,
    ) -> String {
        let repo = ViaturaRepository::new(pool.clone());
        let viatura = repo
            .create(CreateViaturaRequest {
                patrimonio: patrimonio.to_string(),
                placa: format!("PM-{}", patrimonio),
                tipo: "SUV".to_string(),
                modelo: "Duster".to_string(),
                ano: 2024,
                cor: "Branca".to_string(),
                locadora: None,
                numero_cartao: None,
                combustivel: "GASOLINA".to_string(),
                saldo: Some(saldo),
                status,
                km_atual: Some(10_000),
                observacoes: None,
            })
            .await
            .unwrap();
        viatura.id
    }

    async fn saldo_atual(pool: &SqlitePool, viatura_id: &str) -> f64 {
        sqlx::query_scalar("SELECT saldo FROM viaturas WHERE id = ?")
            .bind(viatura_id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    fn request_abastecimento(viatura_id: &str, valor: f64) -> CreateAbastecimentoRequest {
        CreateAbastecimentoRequest {
            viatura_id: viatura_id.to_string(),
            data_abastecimento: "2025-03-10".to_string(),
            hora_abastecimento: "09:15".to_string(),
            km_abastecimento: 10_100,
            litros: 30.0,
            valor_total: valor,
            posto: "Posto Central".to_string(),
            combustivel: "GASOLINA".to_string(),
        }
    }

    #[tokio::test]
    async fn test_abastecimento_debita_saldo() {
        let pool = setup().await;
        let viatura_id = criar_viatura(&pool, "VTR-001", 100.0).await;
        let controller = AbastecimentoController::new(pool.clone());

        let response = controller
            .create(request_abastecimento(&viatura_id, 40.0))
            .await
            .unwrap();
        assert!(response.success);

        assert_eq!(saldo_atual(&pool, &viatura_id).await, 60.0);

        let registro = controller.get_by_id(&response.id).await.unwrap();
        assert_eq!(registro.valor_total, 40.0);
        assert_eq!(registro.viatura_id, viatura_id);
    }

    #[tokio::test]
    async fn test_abastecimento_saldo_insuficiente() {
        let pool = setup().await;
        let viatura_id = criar_viatura(&pool, "VTR-002", 100.0).await;
        let controller = AbastecimentoController::new(pool.clone());

        let result = controller
            .create(request_abastecimento(&viatura_id, 150.0))
            .await;
        assert!(matches!(result, Err(AppError::InsufficientBalance)));

        // O saldo e a tabela de abastecimentos ficam intactos
        assert_eq!(saldo_atual(&pool, &viatura_id).await, 100.0);
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM abastecimentos")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_abastecimento_viatura_inexistente() {
        let pool = setup().await;
        let controller = AbastecimentoController::new(pool.clone());

        let result = controller
            .create(request_abastecimento("nao-existe", 10.0))
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_abastecimento_nao_move_hodometro() {
        let pool = setup().await;
        let viatura_id = criar_viatura(&pool, "VTR-003", 500.0).await;
        let controller = AbastecimentoController::new(pool.clone());

        controller
            .create(request_abastecimento(&viatura_id, 50.0))
            .await
            .unwrap();

        // Só o fechamento de mapa atualiza km_atual
        let km: i64 = sqlx::query_scalar("SELECT km_atual FROM viaturas WHERE id = ?")
            .bind(&viatura_id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(km, 10_000);
    }

    #[tokio::test]
    async fn test_abastecimentos_concorrentes_nunca_negativam_saldo() {
        let pool = setup().await;
        let viatura_id = criar_viatura(&pool, "VTR-004", 100.0).await;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let pool = pool.clone();
            let viatura_id = viatura_id.clone();
            handles.push(tokio::spawn(async move {
                let repo = AbastecimentoRepository::new(pool);
                repo.create(
                    &viatura_id,
                    chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                    chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                    10_100,
                    20.0,
                    30.0,
                    "Posto Central",
                    "GASOLINA",
                )
                .await
            }));
        }

        let mut sucessos = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                sucessos += 1;
            }
        }

        // Com saldo 100 e débitos de 30, no máximo 3 podem passar
        assert!(sucessos <= 3);
        let saldo = saldo_atual(&pool, &viatura_id).await;
        assert!(saldo >= 0.0, "saldo ficou negativo: {}", saldo);
        assert_eq!(saldo, 100.0 - 30.0 * sucessos as f64);
    }

    #[tokio::test]
    async fn test_reset_mensal_aplica_somente_em_ativas() {
        let pool = setup().await;
        let ativa = criar_viatura(&pool, "VTR-005", 12.5).await;
        let manutencao = criar_viatura_com_status(
            &pool,
            "VTR-006",
            77.0,
            Some(crate::models::viatura::ViaturaStatus::Manutencao),
        )
        .await;

        let repo = AbastecimentoRepository::new(pool.clone());
        let executado = repo.check_monthly_reset(3000.0, Utc::now()).await.unwrap();
        assert!(executado);

        assert_eq!(saldo_atual(&pool, &ativa).await, 3000.0);
        assert_eq!(saldo_atual(&pool, &manutencao).await, 77.0);
    }

    #[tokio::test]
    async fn test_reset_mensal_idempotente_no_mes() {
        let pool = setup().await;
        let viatura_id = criar_viatura(&pool, "VTR-007", 0.0).await;
        let repo = AbastecimentoRepository::new(pool.clone());

        let agora = Utc.with_ymd_and_hms(2025, 3, 15, 10, 0, 0).unwrap();
        assert!(repo.check_monthly_reset(3000.0, agora).await.unwrap());

        // Gastar parte do saldo e verificar que o segundo reset no mesmo
        // mês não devolve o valor
        sqlx::query("UPDATE viaturas SET saldo = saldo - 500 WHERE id = ?")
            .bind(&viatura_id)
            .execute(&pool)
            .await
            .unwrap();

        let mais_tarde = agora + Duration::days(5);
        assert!(!repo.check_monthly_reset(3000.0, mais_tarde).await.unwrap());
        assert_eq!(saldo_atual(&pool, &viatura_id).await, 2500.0);
    }

    #[tokio::test]
    async fn test_reset_mensal_executa_na_virada_do_mes() {
        let pool = setup().await;
        let viatura_id = criar_viatura(&pool, "VTR-008", 0.0).await;
        let repo = AbastecimentoRepository::new(pool.clone());

        let marco = Utc.with_ymd_and_hms(2025, 3, 28, 8, 0, 0).unwrap();
        assert!(repo.check_monthly_reset(3000.0, marco).await.unwrap());

        sqlx::query("UPDATE viaturas SET saldo = 10 WHERE id = ?")
            .bind(&viatura_id)
            .execute(&pool)
            .await
            .unwrap();

        // Primeiro acesso em abril dispara um novo reset
        let abril: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 1).unwrap();
        assert_eq!(abril.month(), 4);
        assert!(repo.check_monthly_reset(3000.0, abril).await.unwrap());
        assert_eq!(saldo_atual(&pool, &viatura_id).await, 3000.0);
    }
}
