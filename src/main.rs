use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use gestao_frota::config::environment::EnvironmentConfig;
use gestao_frota::database::DatabaseConnection;
use gestao_frota::database::connection::{run_migrations, seed_default_admin};
use gestao_frota::middleware::cors::cors_middleware;
use gestao_frota::routes::create_api_router;
use gestao_frota::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚔 Sistema de Gestão de Frota - API");
    info!("===================================");

    let config = EnvironmentConfig::default();

    // Inicializar banco de dados
    let db_connection = match DatabaseConnection::new(&config.database_url).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Erro conectando ao banco de dados: {}", e);
            return Err(anyhow::anyhow!("Erro de banco de dados: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Criar tabelas e usuário admin padrão
    run_migrations(&pool).await?;
    seed_default_admin(&pool).await?;

    // Criar router da API
    let app_state = AppState::new(pool, config.clone());

    let app = create_api_router()
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("👮 Motoristas:");
    info!("   POST   /api/motoristas - Cadastrar motorista");
    info!("   POST   /api/motoristas/login - Login");
    info!("   POST   /api/motoristas/verificar - Verificar matrícula");
    info!("   GET    /api/motoristas - Listar motoristas");
    info!("   GET    /api/motoristas/:id - Obter motorista");
    info!("   PUT    /api/motoristas/:id - Atualizar motorista");
    info!("   DELETE /api/motoristas/:id - Excluir motorista");
    info!("🚗 Viaturas:");
    info!("   POST   /api/viaturas - Cadastrar viatura");
    info!("   GET    /api/viaturas - Listar viaturas");
    info!("   GET    /api/viaturas/:id - Obter viatura");
    info!("   PUT    /api/viaturas/:id - Atualizar viatura");
    info!("   PUT    /api/viaturas/:id/saldo - Adicionar saldo");
    info!("   DELETE /api/viaturas/:id - Excluir viatura");
    info!("⛽ Abastecimentos:");
    info!("   POST   /api/abastecimentos - Registrar abastecimento");
    info!("   POST   /api/abastecimentos/verificar-reset - Reset mensal de saldos");
    info!("   GET    /api/abastecimentos - Listar abastecimentos");
    info!("   GET    /api/abastecimentos/:id - Obter abastecimento");
    info!("   DELETE /api/abastecimentos/:id - Excluir abastecimento");
    info!("🗺️  Uso de Viaturas:");
    info!("   POST   /api/uso-viaturas - Abrir registro de uso");
    info!("   PUT    /api/uso-viaturas/:id/fechar - Fechar mapa");
    info!("   PUT    /api/uso-viaturas/:id/editar - Editar dados finais");
    info!("   GET    /api/uso-viaturas - Listar registros");
    info!("   GET    /api/uso-viaturas/:id - Obter registro");
    info!("   DELETE /api/uso-viaturas/:id - Excluir registro");
    info!("🔧 Avarias:");
    info!("   POST   /api/avarias - Registrar avaria");
    info!("   PUT    /api/avarias/:id/status - Atualizar status");
    info!("   GET    /api/avarias - Listar avarias");
    info!("   GET    /api/avarias/:id - Obter avaria");
    info!("   DELETE /api/avarias/:id - Excluir avaria");
    info!("🤝 Empréstimos:");
    info!("   POST   /api/emprestimos - Registrar empréstimo");
    info!("   PUT    /api/emprestimos/:id/finalizar - Finalizar empréstimo");
    info!("   GET    /api/emprestimos - Listar empréstimos");
    info!("   GET    /api/emprestimos/:id - Obter empréstimo");
    info!("   DELETE /api/emprestimos/:id - Excluir empréstimo");
    info!("📊 Dashboard:");
    info!("   GET    /api/dashboard - Estatísticas gerais");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Sinal de desligamento graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Sinal Ctrl+C recebido, desligando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, desligando servidor...");
        },
    }
}
