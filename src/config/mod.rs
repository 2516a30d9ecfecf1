//! Módulo de configuração
//!
//! Contém a configuração de ambiente da aplicação.

pub mod environment;
