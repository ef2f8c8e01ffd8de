//! Cliente HTTP del panel
//!
//! Un único cliente configurado contra el API del sistema de monitoreo:
//! URL base desde el entorno, timeout fijo de 15 segundos, inyección
//! automática del token bearer desde la sesión y logging centralizado
//! de errores en cada respuesta. Sin retry y sin cancelación: una
//! llamada fallida requiere reintento explícito del usuario.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

use crate::config::{EnvironmentConfig, TIMEOUT_API_SEGUNDOS};
use crate::session::SessionStore;
use crate::utils::errors::ApiError;

pub struct ApiGateway {
    client: Client,
    base_url: Option<String>,
    session: Arc<SessionStore>,
}

impl ApiGateway {
    /// Crear el gateway a partir de la configuración del entorno.
    pub fn new(config: &EnvironmentConfig, session: Arc<SessionStore>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_API_SEGUNDOS))
            .build()?;

        Ok(Self {
            client,
            base_url: config
                .api_base_url
                .as_ref()
                .map(|u| u.trim_end_matches('/').to_string()),
            session,
        })
    }

    /// Ejecutar una petición contra el API. Adjunta el bearer si hay
    /// sesión, registra cualquier falla y la propaga sin transformar.
    async fn ejecutar(
        &self,
        metodo: Method,
        ruta: &str,
        cuerpo: Option<&Value>,
    ) -> Result<Response, ApiError> {
        let Some(base) = self.base_url.as_deref() else {
            error!("❌ API Error: API_BASE_URL no está definida");
            return Err(ApiError::BaseUrlAusente);
        };

        let url = format!("{}{}", base, ruta);
        let mut peticion = self.client.request(metodo, &url);

        if let Some(token) = self.session.token() {
            peticion = peticion.bearer_auth(token);
        }
        if let Some(cuerpo) = cuerpo {
            peticion = peticion.json(cuerpo);
        }

        let respuesta = match peticion.send().await {
            Ok(r) => r,
            Err(e) => {
                error!("❌ API Error: {}", e);
                return Err(ApiError::Red(e));
            }
        };

        let status = respuesta.status();
        if !status.is_success() {
            let cuerpo = respuesta.json::<Value>().await.ok();
            match &cuerpo {
                Some(payload) => error!("❌ API Error: {}", payload),
                None => error!("❌ API Error: HTTP {}", status),
            }
            return Err(ApiError::Respuesta { status, cuerpo });
        }

        Ok(respuesta)
    }

    pub async fn get<T: DeserializeOwned>(&self, ruta: &str) -> Result<T, ApiError> {
        let respuesta = self.ejecutar(Method::GET, ruta, None).await?;
        respuesta.json::<T>().await.map_err(ApiError::Red)
    }

    pub async fn post<T: DeserializeOwned>(&self, ruta: &str, cuerpo: &Value) -> Result<T, ApiError> {
        let respuesta = self.ejecutar(Method::POST, ruta, Some(cuerpo)).await?;
        respuesta.json::<T>().await.map_err(ApiError::Red)
    }

    pub async fn patch<T: DeserializeOwned>(&self, ruta: &str, cuerpo: &Value) -> Result<T, ApiError> {
        let respuesta = self.ejecutar(Method::PATCH, ruta, Some(cuerpo)).await?;
        respuesta.json::<T>().await.map_err(ApiError::Red)
    }

    pub async fn delete(&self, ruta: &str) -> Result<(), ApiError> {
        self.ejecutar(Method::DELETE, ruta, None).await?;
        Ok(())
    }

    /// Sesión compartida con el resto del panel.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }
}
