//! Middleware de CORS
//!
//! O frontend é servido de origem distinta; a API libera qualquer
//! origem, como o sistema original fazia.

use tower_http::cors::CorsLayer;

/// Criar middleware de CORS permissivo
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
