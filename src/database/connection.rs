//! Conexão e schema do banco de dados
//!
//! Este módulo cria o pool de conexões SQLite, as tabelas do sistema
//! e o usuário administrador padrão.

use std::str::FromStr;

use anyhow::Result;
use bcrypt::{hash, DEFAULT_COST};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Statements de criação do schema, na ordem de dependência das FKs
const SCHEMA: &[&str] = &[
    // Tabela de usuários/motoristas
    "CREATE TABLE IF NOT EXISTS motoristas (
        id TEXT PRIMARY KEY,
        nome_completo TEXT NOT NULL,
        nome_guerra TEXT NOT NULL,
        graduacao TEXT NOT NULL,
        matricula TEXT UNIQUE NOT NULL,
        codigo_condutor TEXT,
        cpf TEXT UNIQUE,
        telefone TEXT,
        email TEXT,
        senha TEXT NOT NULL,
        status TEXT DEFAULT 'ATIVO',
        is_admin INTEGER DEFAULT 0,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )",
    // Tabela de viaturas
    "CREATE TABLE IF NOT EXISTS viaturas (
        id TEXT PRIMARY KEY,
        patrimonio TEXT UNIQUE NOT NULL,
        placa TEXT UNIQUE NOT NULL,
        tipo TEXT NOT NULL,
        modelo TEXT NOT NULL,
        ano INTEGER NOT NULL,
        cor TEXT NOT NULL,
        locadora TEXT,
        numero_cartao TEXT,
        combustivel TEXT NOT NULL,
        saldo REAL DEFAULT 0,
        status TEXT DEFAULT 'ATIVA',
        km_atual INTEGER DEFAULT 0,
        observacoes TEXT,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )",
    // Tabela de abastecimentos
    "CREATE TABLE IF NOT EXISTS abastecimentos (
        id TEXT PRIMARY KEY,
        viatura_id TEXT NOT NULL,
        data_abastecimento DATE NOT NULL,
        hora_abastecimento TIME NOT NULL,
        km_abastecimento INTEGER NOT NULL,
        litros REAL NOT NULL,
        valor_total REAL NOT NULL,
        posto TEXT NOT NULL,
        combustivel TEXT NOT NULL,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (viatura_id) REFERENCES viaturas (id)
    )",
    // Tabela de uso de viaturas (fechado_em marca o fechamento do mapa e
    // não é alterado por edições posteriores)
    "CREATE TABLE IF NOT EXISTS uso_viaturas (
        id TEXT PRIMARY KEY,
        motorista_id TEXT NOT NULL,
        viatura_id TEXT NOT NULL,
        emprego_missao TEXT NOT NULL,
        data_inicial DATE NOT NULL,
        hora_inicial TIME NOT NULL,
        km_inicial INTEGER NOT NULL,
        data_final DATE,
        hora_final TIME,
        km_final INTEGER,
        observacoes TEXT,
        status TEXT DEFAULT 'ABERTO',
        fechado_em DATETIME,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (motorista_id) REFERENCES motoristas (id),
        FOREIGN KEY (viatura_id) REFERENCES viaturas (id)
    )",
    // Tabela de avarias
    "CREATE TABLE IF NOT EXISTS avarias (
        id TEXT PRIMARY KEY,
        motorista_id TEXT NOT NULL,
        data_verificacao DATE NOT NULL,
        tipo_viatura TEXT NOT NULL,
        placa TEXT NOT NULL,
        km_atual INTEGER NOT NULL,
        patrimonio TEXT NOT NULL,
        problemas TEXT NOT NULL,
        observacoes TEXT,
        assinatura TEXT NOT NULL,
        status TEXT DEFAULT 'PENDENTE',
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (motorista_id) REFERENCES motoristas (id)
    )",
    // Tabela de empréstimos
    "CREATE TABLE IF NOT EXISTS emprestimos (
        id TEXT PRIMARY KEY,
        condutor_grad TEXT NOT NULL,
        condutor_matricula TEXT NOT NULL,
        condutor_nome TEXT NOT NULL,
        condutor_cpf TEXT NOT NULL,
        condutor_unidade TEXT NOT NULL,
        condutor_telefone TEXT,
        viatura_id TEXT NOT NULL,
        finalidade TEXT NOT NULL,
        data_inicial DATE NOT NULL,
        hora_inicial TIME NOT NULL,
        data_final DATE NOT NULL,
        hora_final TIME NOT NULL,
        km_inicial INTEGER NOT NULL,
        km_previsto INTEGER,
        km_devolucao INTEGER,
        data_devolucao DATE,
        hora_devolucao TIME,
        observacoes TEXT,
        responsavel TEXT NOT NULL,
        status TEXT DEFAULT 'ATIVO',
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (viatura_id) REFERENCES viaturas (id)
    )",
    // Parâmetros do sistema (marcador do reset mensal de saldos)
    "CREATE TABLE IF NOT EXISTS parametros (
        chave TEXT PRIMARY KEY,
        valor TEXT NOT NULL
    )",
];

/// Conexão com o banco de dados SQLite
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Criar um pool de conexões a partir da URL informada
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // Bancos em memória existem por conexão: o pool precisa ficar
        // restrito a uma única conexão para enxergar o mesmo schema
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Criar um pool usando DATABASE_URL do ambiente
    pub async fn new_default() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://frota.db".to_string());
        Self::new(&database_url).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Criar as tabelas do sistema
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Inserir o usuário admin padrão quando nenhum administrador existe
pub async fn seed_default_admin(pool: &SqlitePool) -> Result<(), AppError> {
    let admins: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM motoristas WHERE is_admin = 1")
            .fetch_one(pool)
            .await?;

    if admins > 0 {
        return Ok(());
    }

    let agora = Utc::now();
    let senha = hash("admin123", DEFAULT_COST)?;

    sqlx::query(
        "INSERT INTO motoristas (id, nome_completo, nome_guerra, graduacao, matricula, senha, status, is_admin, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, 'ATIVO', 1, ?7, ?7)",
    )
    .bind(format!("admin_{}", Uuid::new_v4()))
    .bind("Administrador do Sistema")
    .bind("ADMIN")
    .bind("MAJ")
    .bind("admin")
    .bind(senha)
    .bind(agora)
    .execute(pool)
    .await?;

    Ok(())
}
