pub mod abastecimento_routes;
pub mod avaria_routes;
pub mod dashboard_routes;
pub mod emprestimo_routes;
pub mod motorista_routes;
pub mod uso_viatura_routes;
pub mod viatura_routes;

use axum::Router;

use crate::state::AppState;

/// Criar o router principal da API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/motoristas", motorista_routes::create_motorista_router())
        .nest("/api/viaturas", viatura_routes::create_viatura_router())
        .nest(
            "/api/abastecimentos",
            abastecimento_routes::create_abastecimento_router(),
        )
        .nest(
            "/api/uso-viaturas",
            uso_viatura_routes::create_uso_viatura_router(),
        )
        .nest("/api/avarias", avaria_routes::create_avaria_router())
        .nest(
            "/api/emprestimos",
            emprestimo_routes::create_emprestimo_router(),
        )
        .nest("/api/dashboard", dashboard_routes::create_dashboard_router())
}
