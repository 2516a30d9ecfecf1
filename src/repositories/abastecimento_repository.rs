use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::abastecimento::{Abastecimento, AbastecimentoComViatura};
use crate::models::viatura::ViaturaStatus;
use crate::utils::errors::AppError;

/// Chave do marcador de último reset na tabela `parametros`
const CHAVE_ULTIMO_RESET: &str = "ultimo_reset_saldo";

pub struct AbastecimentoRepository {
    pool: SqlitePool,
}

impl AbastecimentoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Registrar um abastecimento debitando o saldo da viatura.
    ///
    /// A verificação de saldo e o débito acontecem em um único UPDATE
    /// condicional, dentro da mesma transação da inserção: duas chamadas
    /// concorrentes nunca deixam o saldo negativo. O km_atual da viatura
    /// NÃO é alterado aqui; só o fechamento de mapa move o hodômetro.
    pub async fn create(
        &self,
        viatura_id: &str,
        data_abastecimento: NaiveDate,
        hora_abastecimento: NaiveTime,
        km_abastecimento: i64,
        litros: f64,
        valor_total: f64,
        posto: &str,
        combustivel: &str,
    ) -> Result<Abastecimento, AppError> {
        let mut tx = self.pool.begin().await?;

        let saldo: Option<f64> =
            sqlx::query_scalar("SELECT saldo FROM viaturas WHERE id = ?")
                .bind(viatura_id)
                .fetch_optional(&mut *tx)
                .await?;

        let saldo = saldo
            .ok_or_else(|| AppError::NotFound("Viatura não encontrada".to_string()))?;

        if valor_total > saldo {
            return Err(AppError::InsufficientBalance);
        }

        let debitado = sqlx::query(
            "UPDATE viaturas SET saldo = saldo - ?1, updated_at = ?2 WHERE id = ?3 AND saldo >= ?1",
        )
        .bind(valor_total)
        .bind(Utc::now())
        .bind(viatura_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if debitado == 0 {
            // O saldo lido era suficiente mas outra operação debitou antes
            return Err(AppError::Conflict(
                "Saldo alterado por operação concorrente".to_string(),
            ));
        }

        let id = Uuid::new_v4().to_string();
        let abastecimento = sqlx::query_as::<_, Abastecimento>(
            r#"
            INSERT INTO abastecimentos (id, viatura_id, data_abastecimento, hora_abastecimento, km_abastecimento, litros, valor_total, posto, combustivel, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(viatura_id)
        .bind(data_abastecimento)
        .bind(hora_abastecimento)
        .bind(km_abastecimento)
        .bind(litros)
        .bind(valor_total)
        .bind(posto)
        .bind(combustivel)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(abastecimento)
    }

    /// Executar o reset mensal de saldos quando ainda não ocorreu no mês
    /// corrente. O marcador e a atualização das viaturas ATIVAS são
    /// gravados na mesma transação; chamar de novo no mesmo mês é no-op.
    ///
    /// Retorna true quando o reset foi executado nesta chamada.
    pub async fn check_monthly_reset(
        &self,
        valor_reset: f64,
        agora: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let primeiro_dia = NaiveDate::from_ymd_opt(agora.year(), agora.month(), 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| AppError::Internal("data do reset inválida".to_string()))?
            .and_utc();

        let mut tx = self.pool.begin().await?;

        let marcador: Option<String> =
            sqlx::query_scalar("SELECT valor FROM parametros WHERE chave = ?")
                .bind(CHAVE_ULTIMO_RESET)
                .fetch_optional(&mut *tx)
                .await?;

        let ja_executado = marcador
            .and_then(|v| DateTime::parse_from_rfc3339(&v).ok())
            .map(|ultimo| ultimo.with_timezone(&Utc) >= primeiro_dia)
            .unwrap_or(false);

        if ja_executado {
            return Ok(false);
        }

        sqlx::query("UPDATE viaturas SET saldo = ?, updated_at = ? WHERE status = ?")
            .bind(valor_reset)
            .bind(agora)
            .bind(ViaturaStatus::Ativa)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO parametros (chave, valor) VALUES (?, ?)
             ON CONFLICT(chave) DO UPDATE SET valor = excluded.valor",
        )
        .bind(CHAVE_ULTIMO_RESET)
        .bind(agora.to_rfc3339())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(true)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Abastecimento>, AppError> {
        let abastecimento =
            sqlx::query_as::<_, Abastecimento>("SELECT * FROM abastecimentos WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(abastecimento)
    }

    pub async fn find_all(&self) -> Result<Vec<AbastecimentoComViatura>, AppError> {
        let abastecimentos = sqlx::query_as::<_, AbastecimentoComViatura>(
            r#"
            SELECT a.*, v.patrimonio, v.placa
            FROM abastecimentos a
            LEFT JOIN viaturas v ON a.viatura_id = v.id
            ORDER BY a.data_abastecimento DESC, a.hora_abastecimento DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(abastecimentos)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM abastecimentos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                "Abastecimento não encontrado".to_string(),
            ));
        }

        Ok(())
    }
}
