use sqlx::SqlitePool;

use crate::dto::dashboard_dto::DashboardStats;
use crate::models::avaria::AvariaStatus;
use crate::models::motorista::MotoristaStatus;
use crate::models::uso_viatura::UsoViaturaStatus;
use crate::models::viatura::ViaturaStatus;
use crate::utils::errors::AppError;

/// Contadores agregados para o painel inicial do frontend
pub struct DashboardController {
    pool: SqlitePool,
}

impl DashboardController {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn stats(&self) -> Result<DashboardStats, AppError> {
        let total_viaturas: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM viaturas")
            .fetch_one(&self.pool)
            .await?;

        let viaturas_ativas: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM viaturas WHERE status = ?")
                .bind(ViaturaStatus::Ativa)
                .fetch_one(&self.pool)
                .await?;

        let viaturas_manutencao: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM viaturas WHERE status = ?")
                .bind(ViaturaStatus::Manutencao)
                .fetch_one(&self.pool)
                .await?;

        let total_motoristas: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM motoristas WHERE status = ?")
                .bind(MotoristaStatus::Ativo)
                .fetch_one(&self.pool)
                .await?;

        let uso_aberto: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM uso_viaturas WHERE status = ?")
                .bind(UsoViaturaStatus::Aberto)
                .fetch_one(&self.pool)
                .await?;

        let avarias_pendentes: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM avarias WHERE status = ?")
                .bind(AvariaStatus::Pendente)
                .fetch_one(&self.pool)
                .await?;

        Ok(DashboardStats {
            total_viaturas,
            viaturas_ativas,
            viaturas_manutencao,
            total_motoristas,
            uso_aberto,
            avarias_pendentes,
        })
    }
}
