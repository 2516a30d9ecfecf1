use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::avaria::{Avaria, AvariaComMotorista, AvariaStatus};
use crate::utils::errors::AppError;

pub struct AvariaRepository {
    pool: SqlitePool,
}

impl AvariaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        motorista_id: &str,
        data_verificacao: NaiveDate,
        tipo_viatura: &str,
        placa: &str,
        km_atual: i64,
        patrimonio: &str,
        problemas_json: &str,
        observacoes: Option<String>,
        assinatura: &str,
    ) -> Result<Avaria, AppError> {
        let id = Uuid::new_v4().to_string();

        let avaria = sqlx::query_as::<_, Avaria>(
            r#"
            INSERT INTO avarias (id, motorista_id, data_verificacao, tipo_viatura, placa, km_atual, patrimonio, problemas, observacoes, assinatura, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 'PENDENTE', ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(motorista_id)
        .bind(data_verificacao)
        .bind(tipo_viatura)
        .bind(placa)
        .bind(km_atual)
        .bind(patrimonio)
        .bind(problemas_json)
        .bind(observacoes)
        .bind(assinatura)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(avaria)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Avaria>, AppError> {
        let avaria = sqlx::query_as::<_, Avaria>("SELECT * FROM avarias WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(avaria)
    }

    pub async fn find_all(&self) -> Result<Vec<AvariaComMotorista>, AppError> {
        let avarias = sqlx::query_as::<_, AvariaComMotorista>(
            r#"
            SELECT a.*, m.nome_guerra, m.graduacao
            FROM avarias a
            LEFT JOIN motoristas m ON a.motorista_id = m.id
            ORDER BY a.data_verificacao DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(avarias)
    }

    /// Sobrescrita incondicional do status; não há sequência obrigatória
    /// entre os valores nem trilha de auditoria
    pub async fn update_status(&self, id: &str, status: AvariaStatus) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE avarias SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Avaria não encontrada".to_string()));
        }

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM avarias WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Avaria não encontrada".to_string()));
        }

        Ok(())
    }
}
