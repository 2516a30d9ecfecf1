//! Controllers
//!
//! Camada de orquestração: valida as requisições, aplica as regras de
//! domínio (saldo, hodômetro, janela de edição, transições de status)
//! e delega o SQL aos repositórios.

pub mod abastecimento_controller;
pub mod avaria_controller;
pub mod dashboard_controller;
pub mod emprestimo_controller;
pub mod motorista_controller;
pub mod uso_viatura_controller;
pub mod viatura_controller;
