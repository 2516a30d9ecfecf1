//! Controller de Uso de Viaturas
//!
//! Máquina de estados do registro de uso ("mapa"): ABERTO no registro da
//! saída, FINALIZADO no fechamento. O fechamento grava o hodômetro da
//! viatura na mesma transação da transição. Depois de finalizado, os
//! dados finais podem ser corrigidos por até 20 minutos.

use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::uso_viatura_dto::{CreateUsoViaturaRequest, FecharUsoViaturaRequest};
use crate::dto::{ApiResponse, CreatedResponse};
use crate::models::uso_viatura::{UsoViatura, UsoViaturaComDetalhes, UsoViaturaStatus};
use crate::repositories::motorista_repository::MotoristaRepository;
use crate::repositories::uso_viatura_repository::UsoViaturaRepository;
use crate::repositories::viatura_repository::ViaturaRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{parse_data, parse_hora};

/// Janela de correção dos dados finais após o fechamento
pub const JANELA_EDICAO_MINUTOS: i64 = 20;

/// Um registro só pode ser editado enquanto estiver FINALIZADO há menos
/// de 20 minutos. Edições não estendem a janela: `fechado_em` é fixado
/// no fechamento.
pub fn can_edit(
    status: UsoViaturaStatus,
    fechado_em: Option<DateTime<Utc>>,
    agora: DateTime<Utc>,
) -> bool {
    status == UsoViaturaStatus::Finalizado
        && fechado_em
            .map(|fechamento| agora - fechamento < Duration::minutes(JANELA_EDICAO_MINUTOS))
            .unwrap_or(false)
}

pub struct UsoViaturaController {
    repository: UsoViaturaRepository,
    motorista_repository: MotoristaRepository,
    viatura_repository: ViaturaRepository,
}

impl UsoViaturaController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: UsoViaturaRepository::new(pool.clone()),
            motorista_repository: MotoristaRepository::new(pool.clone()),
            viatura_repository: ViaturaRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateUsoViaturaRequest,
    ) -> Result<CreatedResponse, AppError> {
        request.validate()?;

        // Referências precisam existir; nenhuma exclusividade é exigida:
        // motorista e viatura podem ter mais de um registro ABERTO
        self.motorista_repository
            .find_by_id(&request.motorista_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Motorista não encontrado".to_string()))?;
        self.viatura_repository
            .find_by_id(&request.viatura_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viatura não encontrada".to_string()))?;

        let data_inicial = parse_data("data_inicial", &request.data_inicial)?;
        let hora_inicial = parse_hora("hora_inicial", &request.hora_inicial)?;

        let uso = self
            .repository
            .create(
                &request.motorista_id,
                &request.viatura_id,
                &request.emprego_missao,
                data_inicial,
                hora_inicial,
                request.km_inicial,
                request.observacoes,
            )
            .await?;

        Ok(CreatedResponse::with_message(
            uso.id,
            "Uso de viatura registrado com sucesso".to_string(),
        ))
    }

    /// Fechar o mapa: ABERTO -> FINALIZADO + hodômetro da viatura
    pub async fn close(
        &self,
        id: &str,
        request: FecharUsoViaturaRequest,
    ) -> Result<ApiResponse<()>, AppError> {
        request.validate()?;

        let uso = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registro de uso não encontrado".to_string()))?;

        if uso.status != UsoViaturaStatus::Aberto {
            return Err(AppError::Conflict(
                "Registro de uso já finalizado".to_string(),
            ));
        }

        if request.km_final < uso.km_inicial {
            return Err(AppError::InvalidOdometer(
                "KM final não pode ser menor que KM inicial".to_string(),
            ));
        }

        let data_final = parse_data("data_final", &request.data_final)?;
        let hora_final = parse_hora("hora_final", &request.hora_final)?;

        self.repository
            .close(
                id,
                &uso.viatura_id,
                data_final,
                hora_final,
                request.km_final,
                request.observacoes,
                Utc::now(),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            (),
            "Mapa fechado com sucesso".to_string(),
        ))
    }

    /// Corrigir os dados finais dentro da janela de edição
    pub async fn edit(
        &self,
        id: &str,
        request: FecharUsoViaturaRequest,
    ) -> Result<ApiResponse<()>, AppError> {
        request.validate()?;

        let uso = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registro de uso não encontrado".to_string()))?;

        if uso.status != UsoViaturaStatus::Finalizado {
            return Err(AppError::Conflict(
                "Registro de uso ainda não foi finalizado".to_string(),
            ));
        }

        if !can_edit(uso.status, uso.fechado_em, Utc::now()) {
            return Err(AppError::EditWindowExpired);
        }

        if request.km_final < uso.km_inicial {
            return Err(AppError::InvalidOdometer(
                "KM final não pode ser menor que KM inicial".to_string(),
            ));
        }

        let data_final = parse_data("data_final", &request.data_final)?;
        let hora_final = parse_hora("hora_final", &request.hora_final)?;

        self.repository
            .edit(
                id,
                &uso.viatura_id,
                data_final,
                hora_final,
                request.km_final,
                request.observacoes,
                Utc::now(),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            (),
            "Dados finais atualizados com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<UsoViatura, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registro de uso não encontrado".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<UsoViaturaComDetalhes>, AppError> {
        self.repository.find_all().await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
