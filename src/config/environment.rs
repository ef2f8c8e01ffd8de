//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::path::PathBuf;

/// Timeout fijo para todas las llamadas al API (segundos).
pub const TIMEOUT_API_SEGUNDOS: u64 = 15;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    /// URL base del API remoto. Opcional: su ausencia se registra como
    /// warning y las llamadas fallan en el momento de ejecutarse.
    pub api_base_url: Option<String>,
    /// Archivo donde se persiste la sesión (token + perfil de usuario).
    pub ruta_sesion: PathBuf,
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno.
    pub fn desde_env() -> Self {
        let api_base_url = env::var("API_BASE_URL").ok().filter(|v| !v.trim().is_empty());
        if api_base_url.is_none() {
            tracing::warn!("⚠️ API_BASE_URL no está definida");
        }

        let ruta_sesion = env::var("SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".sesion.json"));

        Self {
            api_base_url,
            ruta_sesion,
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::desde_env()
    }
}
