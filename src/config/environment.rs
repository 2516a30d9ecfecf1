//! Configuração de variáveis de ambiente
//!
//! Este módulo carrega a configuração do ambiente com valores
//! padrão adequados para desenvolvimento.

use std::env;

/// Valor padrão do reset mensal de saldo por viatura (R$)
pub const SALDO_MENSAL_PADRAO: f64 = 3000.0;

/// Configuração do ambiente
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Valor aplicado a cada viatura ATIVA no reset mensal de saldos
    pub saldo_mensal: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://frota.db".to_string()),
            saldo_mensal: env::var("SALDO_MENSAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(SALDO_MENSAL_PADRAO),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar se estamos em modo desenvolvimento
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obter a URL do servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
