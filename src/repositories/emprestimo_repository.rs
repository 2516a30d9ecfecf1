use chrono::{NaiveDate, NaiveTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::emprestimo_dto::CreateEmprestimoRequest;
use crate::models::emprestimo::{Emprestimo, EmprestimoComViatura};
use crate::utils::errors::AppError;

pub struct EmprestimoRepository {
    pool: SqlitePool,
}

impl EmprestimoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        request: CreateEmprestimoRequest,
        data_inicial: NaiveDate,
        hora_inicial: NaiveTime,
        data_final: NaiveDate,
        hora_final: NaiveTime,
    ) -> Result<Emprestimo, AppError> {
        let id = Uuid::new_v4().to_string();

        let emprestimo = sqlx::query_as::<_, Emprestimo>(
            r#"
            INSERT INTO emprestimos (id, condutor_grad, condutor_matricula, condutor_nome, condutor_cpf, condutor_unidade, condutor_telefone, viatura_id, finalidade, data_inicial, hora_inicial, data_final, hora_final, km_inicial, km_previsto, observacoes, responsavel, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 'ATIVO', ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(request.condutor_grad)
        .bind(request.condutor_matricula)
        .bind(request.condutor_nome)
        .bind(request.condutor_cpf)
        .bind(request.condutor_unidade)
        .bind(request.condutor_telefone)
        .bind(request.viatura_id)
        .bind(request.finalidade)
        .bind(data_inicial)
        .bind(hora_inicial)
        .bind(data_final)
        .bind(hora_final)
        .bind(request.km_inicial)
        .bind(request.km_previsto)
        .bind(request.observacoes)
        .bind(request.responsavel)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(emprestimo)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Emprestimo>, AppError> {
        let emprestimo =
            sqlx::query_as::<_, Emprestimo>("SELECT * FROM emprestimos WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(emprestimo)
    }

    pub async fn find_all(&self) -> Result<Vec<EmprestimoComViatura>, AppError> {
        let emprestimos = sqlx::query_as::<_, EmprestimoComViatura>(
            r#"
            SELECT e.*, v.patrimonio, v.placa
            FROM emprestimos e
            LEFT JOIN viaturas v ON e.viatura_id = v.id
            ORDER BY e.data_inicial DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(emprestimos)
    }

    /// Transição ATIVO -> FINALIZADO registrando a devolução real
    pub async fn finalize(
        &self,
        id: &str,
        km_devolucao: i64,
        data_devolucao: NaiveDate,
        hora_devolucao: NaiveTime,
        observacoes: Option<String>,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE emprestimos
            SET status = 'FINALIZADO', km_devolucao = ?, data_devolucao = ?,
                hora_devolucao = ?, observacoes = COALESCE(?, observacoes)
            WHERE id = ? AND status = 'ATIVO'
            "#,
        )
        .bind(km_devolucao)
        .bind(data_devolucao)
        .bind(hora_devolucao)
        .bind(observacoes)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(
                "Empréstimo já finalizado".to_string(),
            ));
        }

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM emprestimos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                "Empréstimo não encontrado".to_string(),
            ));
        }

        Ok(())
    }
}
