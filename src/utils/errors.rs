//! Sistema de manejo de errores
//!
//! Este módulo define los errores del lado cliente. Toda falla de red,
//! timeout o respuesta no-2xx se propaga sin transformar; los
//! controladores la convierten en un mensaje visible para el usuario.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Errores del gateway HTTP
#[derive(Error, Debug)]
pub enum ApiError {
    /// API_BASE_URL no está configurada: la petición falla sin salir a la red.
    #[error("API_BASE_URL no está definida")]
    BaseUrlAusente,

    /// Respuesta no exitosa del servidor; `cuerpo` conserva el payload
    /// de diagnóstico tal como llegó, si el servidor devolvió JSON.
    #[error("HTTP {status}")]
    Respuesta {
        status: StatusCode,
        cuerpo: Option<Value>,
    },

    /// Falla de transporte o timeout (15s sin respuesta).
    #[error("Error de red: {0}")]
    Red(#[from] reqwest::Error),
}

impl ApiError {
    /// Mensaje legible que el servidor incluyó en el cuerpo de error
    /// (`message` o `error`), si lo hubo.
    pub fn mensaje_servidor(&self) -> Option<String> {
        match self {
            ApiError::Respuesta { cuerpo: Some(v), .. } => v
                .get("message")
                .or_else(|| v.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        }
    }

    /// Código de estado HTTP, cuando el servidor llegó a responder.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Respuesta { status, .. } => Some(*status),
            ApiError::Red(e) => e.status(),
            ApiError::BaseUrlAusente => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mensaje_servidor_prefiere_message() {
        let err = ApiError::Respuesta {
            status: StatusCode::UNAUTHORIZED,
            cuerpo: Some(json!({ "message": "Invalid credentials", "error": "Unauthorized" })),
        };
        assert_eq!(err.mensaje_servidor().as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_mensaje_servidor_cae_a_error() {
        let err = ApiError::Respuesta {
            status: StatusCode::BAD_REQUEST,
            cuerpo: Some(json!({ "error": "Bad Request" })),
        };
        assert_eq!(err.mensaje_servidor().as_deref(), Some("Bad Request"));
    }

    #[test]
    fn test_sin_cuerpo_no_hay_mensaje() {
        let err = ApiError::Respuesta {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            cuerpo: None,
        };
        assert!(err.mensaje_servidor().is_none());
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
