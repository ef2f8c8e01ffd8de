//! Conteos agregados del panel de resumen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_usuarios: i64,
    pub total_colegios: i64,
    pub total_estudiantes: i64,
    pub total_buses: i64,
}
