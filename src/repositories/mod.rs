//! Repositórios de acesso a dados
//!
//! Todo SQL parametrizado do sistema vive aqui. As operações que tocam
//! mais de uma tabela (registrar abastecimento, fechar mapa, reset
//! mensal) executam dentro de uma única transação.

pub mod abastecimento_repository;
pub mod avaria_repository;
pub mod emprestimo_repository;
pub mod motorista_repository;
pub mod uso_viatura_repository;
pub mod viatura_repository;
