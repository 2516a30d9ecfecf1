//! Utilidades de validação
//!
//! Este módulo contém funções helper para validação e conversão
//! dos campos de data e hora recebidos pelo frontend.

use chrono::{NaiveDate, NaiveTime};

use crate::utils::errors::{validation_error, AppError};

/// Validar e converter string para data (YYYY-MM-DD)
pub fn parse_data(field: &'static str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| validation_error(field, "data inválida, formato esperado YYYY-MM-DD"))
}

/// Validar e converter string para hora (HH:MM ou HH:MM:SS)
pub fn parse_hora(field: &'static str, value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| validation_error(field, "hora inválida, formato esperado HH:MM"))
}

/// Validar que um string não está vazio
pub fn validar_nao_vazio(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(validation_error(field, "campo obrigatório"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data() {
        assert!(parse_data("data_inicial", "2025-03-01").is_ok());
        assert!(parse_data("data_inicial", "01/03/2025").is_err());
        assert!(parse_data("data_inicial", "").is_err());
    }

    #[test]
    fn test_parse_hora_aceita_com_e_sem_segundos() {
        assert_eq!(
            parse_hora("hora_inicial", "08:30").unwrap(),
            NaiveTime::from_hms_opt(8, 30, 0).unwrap()
        );
        assert_eq!(
            parse_hora("hora_inicial", "08:30:45").unwrap(),
            NaiveTime::from_hms_opt(8, 30, 45).unwrap()
        );
        assert!(parse_hora("hora_inicial", "8h30").is_err());
    }

    #[test]
    fn test_validar_nao_vazio() {
        assert!(validar_nao_vazio("posto", "Posto Central").is_ok());
        assert!(validar_nao_vazio("posto", "   ").is_err());
    }
}
