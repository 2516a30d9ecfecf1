use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::viatura_dto::{CreateViaturaRequest, UpdateViaturaRequest};
use crate::models::viatura::{Viatura, ViaturaStatus};
use crate::utils::errors::{map_unique_violation, AppError};

pub struct ViaturaRepository {
    pool: SqlitePool,
}

impl ViaturaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateViaturaRequest) -> Result<Viatura, AppError> {
        let id = Uuid::new_v4().to_string();
        let agora = Utc::now();

        let viatura = sqlx::query_as::<_, Viatura>(
            r#"
            INSERT INTO viaturas (id, patrimonio, placa, tipo, modelo, ano, cor, locadora, numero_cartao, combustivel, saldo, status, km_atual, observacoes, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(request.patrimonio)
        .bind(request.placa)
        .bind(request.tipo)
        .bind(request.modelo)
        .bind(request.ano)
        .bind(request.cor)
        .bind(request.locadora)
        .bind(request.numero_cartao)
        .bind(request.combustivel)
        .bind(request.saldo.unwrap_or(0.0))
        .bind(request.status.unwrap_or(ViaturaStatus::Ativa))
        .bind(request.km_atual.unwrap_or(0))
        .bind(request.observacoes)
        .bind(agora)
        .bind(agora)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Patrimônio ou placa já cadastrado"))?;

        Ok(viatura)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Viatura>, AppError> {
        let viatura = sqlx::query_as::<_, Viatura>("SELECT * FROM viaturas WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(viatura)
    }

    pub async fn find_all(&self) -> Result<Vec<Viatura>, AppError> {
        let viaturas =
            sqlx::query_as::<_, Viatura>("SELECT * FROM viaturas ORDER BY patrimonio")
                .fetch_all(&self.pool)
                .await?;

        Ok(viaturas)
    }

    pub async fn update(
        &self,
        id: &str,
        request: UpdateViaturaRequest,
    ) -> Result<Viatura, AppError> {
        // Obter viatura atual; campos ausentes mantêm o valor corrente
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viatura não encontrada".to_string()))?;

        let viatura = sqlx::query_as::<_, Viatura>(
            r#"
            UPDATE viaturas
            SET patrimonio = ?, placa = ?, tipo = ?, modelo = ?, ano = ?, cor = ?,
                locadora = ?, numero_cartao = ?, combustivel = ?, status = ?,
                km_atual = ?, observacoes = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(request.patrimonio.unwrap_or(current.patrimonio))
        .bind(request.placa.unwrap_or(current.placa))
        .bind(request.tipo.unwrap_or(current.tipo))
        .bind(request.modelo.unwrap_or(current.modelo))
        .bind(request.ano.unwrap_or(current.ano))
        .bind(request.cor.unwrap_or(current.cor))
        .bind(request.locadora.or(current.locadora))
        .bind(request.numero_cartao.or(current.numero_cartao))
        .bind(request.combustivel.unwrap_or(current.combustivel))
        .bind(request.status.unwrap_or(current.status))
        .bind(request.km_atual.unwrap_or(current.km_atual))
        .bind(request.observacoes.or(current.observacoes))
        .bind(Utc::now())
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Patrimônio ou placa já cadastrado"))?;

        Ok(viatura)
    }

    /// Crédito administrativo de saldo
    pub async fn add_saldo(&self, id: &str, valor: f64) -> Result<Viatura, AppError> {
        let viatura = sqlx::query_as::<_, Viatura>(
            "UPDATE viaturas SET saldo = saldo + ?, updated_at = ? WHERE id = ? RETURNING *",
        )
        .bind(valor)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Viatura não encontrada".to_string()))?;

        Ok(viatura)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM viaturas WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Viatura não encontrada".to_string()));
        }

        Ok(())
    }
}
