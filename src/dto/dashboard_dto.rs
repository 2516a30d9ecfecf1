use serde::Serialize;

/// Contadores gerais exibidos no painel inicial
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_viaturas: i64,
    pub viaturas_ativas: i64,
    pub viaturas_manutencao: i64,
    pub total_motoristas: i64,
    pub uso_aberto: i64,
    pub avarias_pendentes: i64,
}
