//! Sistema de Gestão de Frota
//!
//! Backend JSON-over-HTTP para controle da frota de viaturas de uma unidade
//! policial: motoristas, viaturas, abastecimentos (com saldo mensal de
//! combustível), uso de viaturas (abertura/fechamento com janela de edição),
//! avarias e empréstimos entre unidades.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
