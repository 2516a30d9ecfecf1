//! Módulo de banco de dados
//!
//! Gerencia a conexão e o schema do SQLite.

pub mod connection;

pub use connection::DatabaseConnection;
