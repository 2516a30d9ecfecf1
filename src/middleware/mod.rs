//! Middleware do sistema
//!
//! Contém o middleware de CORS aplicado ao router principal.

pub mod cors;

pub use cors::*;
