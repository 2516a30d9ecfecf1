//! Modelos de dados
//!
//! Structs que mapeiam as tabelas do banco e os enums de status
//! de cada entidade.

pub mod abastecimento;
pub mod avaria;
pub mod emprestimo;
pub mod motorista;
pub mod uso_viatura;
pub mod viatura;
