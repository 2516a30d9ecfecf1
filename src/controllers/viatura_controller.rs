use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::viatura_dto::{
    AdicionarSaldoRequest, CreateViaturaRequest, UpdateViaturaRequest,
};
use crate::dto::{ApiResponse, CreatedResponse};
use crate::models::viatura::Viatura;
use crate::repositories::viatura_repository::ViaturaRepository;
use crate::utils::errors::AppError;

/// CRUD das viaturas e crédito administrativo de saldo. O débito e a
/// escrita do hodômetro acontecem nos fluxos de abastecimento e de
/// fechamento de mapa, não aqui.
pub struct ViaturaController {
    repository: ViaturaRepository,
}

impl ViaturaController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ViaturaRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateViaturaRequest) -> Result<CreatedResponse, AppError> {
        request.validate()?;

        let viatura = self.repository.create(request).await?;

        Ok(CreatedResponse::with_message(
            viatura.id,
            "Viatura cadastrada com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Viatura, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viatura não encontrada".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Viatura>, AppError> {
        self.repository.find_all().await
    }

    pub async fn update(
        &self,
        id: &str,
        request: UpdateViaturaRequest,
    ) -> Result<ApiResponse<Viatura>, AppError> {
        request.validate()?;

        let viatura = self.repository.update(id, request).await?;

        Ok(ApiResponse::success_with_message(
            viatura,
            "Viatura atualizada com sucesso".to_string(),
        ))
    }

    /// Crédito administrativo de saldo de combustível
    pub async fn add_saldo(
        &self,
        id: &str,
        request: AdicionarSaldoRequest,
    ) -> Result<ApiResponse<Viatura>, AppError> {
        request.validate()?;

        let viatura = self.repository.add_saldo(id, request.valor).await?;

        Ok(ApiResponse::success_with_message(
            viatura,
            "Saldo adicionado com sucesso".to_string(),
        ))
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
    use crate::models::viatura::ViaturaStatus;

    async fn setup() -> SqlitePool {
        let conn = DatabaseConnection::new("sqlite::memory:").await.unwrap();
        let pool = conn.pool().clone();
        run_migrations(&pool).await.unwrap();
        pool
    }

    fn request_viatura(patrimonio: &str, placa: &str) -> CreateViaturaRequest {
        CreateViaturaRequest {
            patrimonio: patrimonio.to_string(),
            placa: placa.to_string(),
            tipo: "SUV".to_string(),
            modelo: "Duster".to_string(),
            ano: 2024,
            cor: "Branca".to_string(),
            locadora: Some("Locadora Estadual".to_string()),
            numero_cartao: None,
            combustivel: "GASOLINA".to_string(),
            saldo: None,
            status: None,
            km_atual: None,
            observacoes: None,
        }
    }

    #[tokio::test]
    async fn test_criar_com_padroes() {
        let pool = setup().await;
        let controller = ViaturaController::new(pool.clone());

        let response = controller
            .create(request_viatura("VTR-300", "PM-0300"))
            .await
            .unwrap();

        let viatura = controller.get_by_id(&response.id).await.unwrap();
        assert_eq!(viatura.status, ViaturaStatus::Ativa);
        assert_eq!(viatura.saldo, 0.0);
        assert_eq!(viatura.km_atual, 0);
    }

    #[tokio::test]
    async fn test_placa_duplicada_conflita() {
        let pool = setup().await;
        let controller = ViaturaController::new(pool.clone());

        controller
            .create(request_viatura("VTR-301", "PM-0301"))
            .await
            .unwrap();
        let result = controller
            .create(request_viatura("VTR-302", "PM-0301"))
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_adicionar_saldo() {
        let pool = setup().await;
        let controller = ViaturaController::new(pool.clone());

        let response = controller
            .create(request_viatura("VTR-303", "PM-0303"))
            .await
            .unwrap();

        let atualizada = controller
            .add_saldo(&response.id, AdicionarSaldoRequest { valor: 150.75 })
            .await
            .unwrap();
        assert_eq!(atualizada.data.unwrap().saldo, 150.75);
    }

    #[tokio::test]
    async fn test_atualizacao_parcial_mantem_campos() {
        let pool = setup().await;
        let controller = ViaturaController::new(pool.clone());

        let response = controller
            .create(request_viatura("VTR-304", "PM-0304"))
            .await
            .unwrap();

        let atualizada = controller
            .update(
                &response.id,
                UpdateViaturaRequest {
                    patrimonio: None,
                    placa: None,
                    tipo: None,
                    modelo: None,
                    ano: None,
                    cor: Some("Preta".to_string()),
                    locadora: None,
                    numero_cartao: None,
                    combustivel: None,
                    status: Some(ViaturaStatus::Manutencao),
                    km_atual: None,
                    observacoes: None,
                },
            )
            .await
            .unwrap()
            .data
            .unwrap();

        assert_eq!(atualizada.cor, "Preta");
        assert_eq!(atualizada.status, ViaturaStatus::Manutencao);
        assert_eq!(atualizada.modelo, "Duster");
        assert_eq!(atualizada.locadora.as_deref(), Some("Locadora Estadual"));
    }
}
