//! Flujo de login
//!
//! Envía las credenciales tal cual, persiste token y perfil en la
//! sesión y deja entrar al shell. En falla muestra el mensaje del
//! servidor si vino, o un fallback genérico.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::ApiGateway;

/// Fallback cuando el servidor no aportó mensaje.
pub const MENSAJE_LOGIN_FALLIDO: &str =
    "Error al iniciar sesión. Verifica tus credenciales e inténtalo de nuevo.";

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
    /// Perfil crudo; se persiste tal cual llegó.
    user: Value,
}

pub struct AuthController {
    gateway: Arc<ApiGateway>,
    enviando: bool,
    error: Option<String>,
}

impl AuthController {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            gateway,
            enviando: false,
            error: None,
        }
    }

    pub fn enviando(&self) -> bool {
        self.enviando
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Autenticarse contra el API. Las credenciales fallidas no
    /// persisten nada: la sesión queda vacía y se permanece en login.
    pub async fn iniciar_sesion(&mut self, email: &str, password: &str) -> bool {
        self.error = None;
        self.enviando = true;
        let resultado = self
            .gateway
            .post::<LoginResponse>("/auth/login", &json!({ "email": email, "password": password }))
            .await;
        self.enviando = false;

        match resultado {
            Ok(respuesta) => {
                self.gateway
                    .session()
                    .establecer(respuesta.access_token, respuesta.user);
                true
            }
            Err(e) => {
                self.error = Some(
                    e.mensaje_servidor()
                        .unwrap_or_else(|| MENSAJE_LOGIN_FALLIDO.to_string()),
                );
                false
            }
        }
    }

    /// Cerrar sesión: limpia el almacén incondicionalmente, sin
    /// llamada al servidor.
    pub fn cerrar_sesion(&self) {
        self.gateway.session().cerrar();
    }
}
