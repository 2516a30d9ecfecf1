use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::uso_viatura::{UsoViatura, UsoViaturaComDetalhes};
use crate::utils::errors::AppError;

pub struct UsoViaturaRepository {
    pool: SqlitePool,
}

impl UsoViaturaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        motorista_id: &str,
        viatura_id: &str,
        emprego_missao: &str,
        data_inicial: NaiveDate,
        hora_inicial: NaiveTime,
        km_inicial: i64,
        observacoes: Option<String>,
    ) -> Result<UsoViatura, AppError> {
        let id = Uuid::new_v4().to_string();
        let agora = Utc::now();

        let uso = sqlx::query_as::<_, UsoViatura>(
            r#"
            INSERT INTO uso_viaturas (id, motorista_id, viatura_id, emprego_missao, data_inicial, hora_inicial, km_inicial, observacoes, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, 'ABERTO', ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(motorista_id)
        .bind(viatura_id)
        .bind(emprego_missao)
        .bind(data_inicial)
        .bind(hora_inicial)
        .bind(km_inicial)
        .bind(observacoes)
        .bind(agora)
        .bind(agora)
        .fetch_one(&self.pool)
        .await?;

        Ok(uso)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<UsoViatura>, AppError> {
        let uso = sqlx::query_as::<_, UsoViatura>("SELECT * FROM uso_viaturas WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(uso)
    }

    pub async fn find_all(&self) -> Result<Vec<UsoViaturaComDetalhes>, AppError> {
        let usos = sqlx::query_as::<_, UsoViaturaComDetalhes>(
            r#"
            SELECT uv.*, m.nome_guerra, m.graduacao, v.patrimonio, v.placa
            FROM uso_viaturas uv
            LEFT JOIN motoristas m ON uv.motorista_id = m.id
            LEFT JOIN viaturas v ON uv.viatura_id = v.id
            ORDER BY uv.data_inicial DESC, uv.hora_inicial DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(usos)
    }

    /// Fechar o mapa: transição ABERTO -> FINALIZADO e escrita do
    /// hodômetro da viatura na MESMA transação. Ou as duas escritas
    /// são confirmadas, ou nenhuma.
    pub async fn close(
        &self,
        id: &str,
        viatura_id: &str,
        data_final: NaiveDate,
        hora_final: NaiveTime,
        km_final: i64,
        observacoes: Option<String>,
        agora: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let fechado = sqlx::query(
            r#"
            UPDATE uso_viaturas
            SET data_final = ?, hora_final = ?, km_final = ?, observacoes = ?,
                status = 'FINALIZADO', fechado_em = ?, updated_at = ?
            WHERE id = ? AND status = 'ABERTO'
            "#,
        )
        .bind(data_final)
        .bind(hora_final)
        .bind(km_final)
        .bind(observacoes)
        .bind(agora)
        .bind(agora)
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if fechado == 0 {
            return Err(AppError::Conflict(
                "Registro de uso já finalizado".to_string(),
            ));
        }

        // Último fechamento vence: nenhuma ordem é prometida entre
        // fechamentos concorrentes da mesma viatura
        sqlx::query("UPDATE viaturas SET km_atual = ?, updated_at = ? WHERE id = ?")
            .bind(km_final)
            .bind(agora)
            .bind(viatura_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Editar os dados finais de um registro FINALIZADO, reaplicando a
    /// escrita do hodômetro. `fechado_em` não é alterado: a janela de
    /// edição não se estende com edições sucessivas.
    pub async fn edit(
        &self,
        id: &str,
        viatura_id: &str,
        data_final: NaiveDate,
        hora_final: NaiveTime,
        km_final: i64,
        observacoes: Option<String>,
        agora: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let editado = sqlx::query(
            r#"
            UPDATE uso_viaturas
            SET data_final = ?, hora_final = ?, km_final = ?, observacoes = ?, updated_at = ?
            WHERE id = ? AND status = 'FINALIZADO'
            "#,
        )
        .bind(data_final)
        .bind(hora_final)
        .bind(km_final)
        .bind(observacoes)
        .bind(agora)
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if editado == 0 {
            return Err(AppError::Conflict(
                "Registro de uso ainda não foi finalizado".to_string(),
            ));
        }

        sqlx::query("UPDATE viaturas SET km_atual = ?, updated_at = ? WHERE id = ?")
            .bind(km_final)
            .bind(agora)
            .bind(viatura_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM uso_viaturas WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                "Registro de uso não encontrado".to_string(),
            ));
        }

        Ok(())
    }
}
