use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::motorista::{Motorista, MotoristaStatus};
use crate::utils::errors::{map_unique_violation, AppError};

pub struct MotoristaRepository {
    pool: SqlitePool,
}

impl MotoristaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserir motorista; `senha_hash` já deve vir hasheada
    pub async fn create(
        &self,
        nome_completo: &str,
        nome_guerra: &str,
        graduacao: &str,
        matricula: &str,
        codigo_condutor: Option<String>,
        cpf: Option<String>,
        telefone: Option<String>,
        email: Option<String>,
        senha_hash: &str,
        status: MotoristaStatus,
        is_admin: bool,
    ) -> Result<Motorista, AppError> {
        let id = Uuid::new_v4().to_string();
        let agora = Utc::now();

        let motorista = sqlx::query_as::<_, Motorista>(
            r#"
            INSERT INTO motoristas (id, nome_completo, nome_guerra, graduacao, matricula, codigo_condutor, cpf, telefone, email, senha, status, is_admin, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(nome_completo)
        .bind(nome_guerra)
        .bind(graduacao)
        .bind(matricula)
        .bind(codigo_condutor)
        .bind(cpf)
        .bind(telefone)
        .bind(email)
        .bind(senha_hash)
        .bind(status)
        .bind(is_admin)
        .bind(agora)
        .bind(agora)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Matrícula ou CPF já cadastrado"))?;

        Ok(motorista)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Motorista>, AppError> {
        let motorista =
            sqlx::query_as::<_, Motorista>("SELECT * FROM motoristas WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(motorista)
    }

    /// Buscar por matrícula entre os motoristas ATIVOS (login/verificação)
    pub async fn find_ativo_by_matricula(
        &self,
        matricula: &str,
    ) -> Result<Option<Motorista>, AppError> {
        let motorista = sqlx::query_as::<_, Motorista>(
            "SELECT * FROM motoristas WHERE matricula = ? AND status = ?",
        )
        .bind(matricula)
        .bind(MotoristaStatus::Ativo)
        .fetch_optional(&self.pool)
        .await?;

        Ok(motorista)
    }

    pub async fn find_all(&self) -> Result<Vec<Motorista>, AppError> {
        let motoristas =
            sqlx::query_as::<_, Motorista>("SELECT * FROM motoristas ORDER BY nome_guerra")
                .fetch_all(&self.pool)
                .await?;

        Ok(motoristas)
    }

    /// Atualização parcial; `senha_hash` substitui a senha apenas quando presente
    pub async fn update(
        &self,
        id: &str,
        nome_completo: Option<String>,
        nome_guerra: Option<String>,
        graduacao: Option<String>,
        codigo_condutor: Option<String>,
        cpf: Option<String>,
        telefone: Option<String>,
        email: Option<String>,
        senha_hash: Option<String>,
        status: Option<MotoristaStatus>,
        is_admin: Option<bool>,
    ) -> Result<Motorista, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Motorista não encontrado".to_string()))?;

        let motorista = sqlx::query_as::<_, Motorista>(
            r#"
            UPDATE motoristas
            SET nome_completo = ?, nome_guerra = ?, graduacao = ?, codigo_condutor = ?,
                cpf = ?, telefone = ?, email = ?, senha = ?, status = ?, is_admin = ?,
                updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(nome_completo.unwrap_or(current.nome_completo))
        .bind(nome_guerra.unwrap_or(current.nome_guerra))
        .bind(graduacao.unwrap_or(current.graduacao))
        .bind(codigo_condutor.or(current.codigo_condutor))
        .bind(cpf.or(current.cpf))
        .bind(telefone.or(current.telefone))
        .bind(email.or(current.email))
        .bind(senha_hash.unwrap_or(current.senha))
        .bind(status.unwrap_or(current.status))
        .bind(is_admin.unwrap_or(current.is_admin))
        .bind(Utc::now())
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Matrícula ou CPF já cadastrado"))?;

        Ok(motorista)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM motoristas WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Motorista não encontrado".to_string()));
        }

        Ok(())
    }
}
