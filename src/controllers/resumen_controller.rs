//! Panel de resumen
//!
//! Carga los conteos agregados una vez por montaje. Los valores
//! ausentes se muestran como "—".

use std::sync::Arc;

use crate::api::ApiGateway;
use crate::models::DashboardStats;

pub struct ResumenController {
    gateway: Arc<ApiGateway>,
    stats: Option<DashboardStats>,
    cargando: bool,
    error: Option<String>,
}

impl ResumenController {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            gateway,
            stats: None,
            cargando: true,
            error: None,
        }
    }

    pub async fn cargar(&mut self) {
        self.cargando = true;
        self.error = None;
        match self.gateway.get::<DashboardStats>("/admin/stats").await {
            Ok(stats) => self.stats = Some(stats),
            Err(_) => self.error = Some("No se pudieron cargar las estadísticas.".to_string()),
        }
        self.cargando = false;
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    pub fn cargando(&self) -> bool {
        self.cargando
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Un conteo como texto, con "—" cuando todavía no hay datos.
    pub fn valor(&self, extraer: impl Fn(&DashboardStats) -> i64) -> String {
        match &self.stats {
            Some(stats) => extraer(stats).to_string(),
            None => "—".to_string(),
        }
    }
}
