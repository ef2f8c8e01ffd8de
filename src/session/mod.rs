//! Almacén de sesión
//!
//! Equivalente al almacenamiento local del navegador: token de
//! autenticación y perfil del usuario, persistidos en un archivo JSON
//! y espejados en memoria. Se escribe en el login, se lee en cada
//! request saliente y por el shell de navegación, y se limpia al
//! cerrar sesión. No se sincroniza entre procesos.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Nombre mostrado cuando no hay perfil utilizable.
const NOMBRE_GENERICO: &str = "Usuario";

/// Perfil mínimo del usuario autenticado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsuarioSesion {
    pub id: i64,
    pub email: String,
    pub rol: String,
    pub nombre: String,
}

/// Contenido persistido: el perfil se guarda como JSON crudo tal como
/// lo devolvió el servidor, y se tipifica recién al leerlo.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Sesion {
    token: String,
    user: Value,
}

pub struct SessionStore {
    ruta: PathBuf,
    sesion: RwLock<Option<Sesion>>,
}

impl SessionStore {
    /// Cargar la sesión persistida. Un archivo ausente o corrupto
    /// simplemente deja la sesión vacía.
    pub fn cargar(ruta: PathBuf) -> Self {
        let sesion = match fs::read_to_string(&ruta) {
            Ok(contenido) => match serde_json::from_str::<Sesion>(&contenido) {
                Ok(s) => Some(s),
                Err(e) => {
                    warn!("⚠️ Sesión persistida inválida en {:?}: {}", ruta, e);
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            ruta,
            sesion: RwLock::new(sesion),
        }
    }

    /// Guardar token y perfil tras un login exitoso.
    pub fn establecer(&self, token: String, user: Value) {
        let sesion = Sesion { token, user };
        if let Ok(contenido) = serde_json::to_string(&sesion) {
            if let Err(e) = fs::write(&self.ruta, contenido) {
                warn!("⚠️ No se pudo persistir la sesión en {:?}: {}", self.ruta, e);
            }
        }
        *self.sesion.write().expect("lock de sesión envenenado") = Some(sesion);
    }

    /// Token actual, si hay sesión iniciada.
    pub fn token(&self) -> Option<String> {
        self.sesion
            .read()
            .expect("lock de sesión envenenado")
            .as_ref()
            .map(|s| s.token.clone())
    }

    /// Perfil tipificado. Un perfil malformado se trata como ausente.
    pub fn usuario(&self) -> Option<UsuarioSesion> {
        self.sesion
            .read()
            .expect("lock de sesión envenenado")
            .as_ref()
            .and_then(|s| serde_json::from_value(s.user.clone()).ok())
    }

    /// Nombre a mostrar en el shell: nombre → email → genérico.
    pub fn nombre_para_mostrar(&self) -> String {
        let guardia = self.sesion.read().expect("lock de sesión envenenado");
        let Some(sesion) = guardia.as_ref() else {
            return NOMBRE_GENERICO.to_string();
        };

        let campo = |clave: &str| {
            sesion
                .user
                .get(clave)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        campo("nombre")
            .or_else(|| campo("email"))
            .unwrap_or_else(|| NOMBRE_GENERICO.to_string())
    }

    /// Cerrar sesión: limpia memoria y archivo. Siempre incondicional,
    /// no hay invalidación del lado servidor.
    pub fn cerrar(&self) {
        *self.sesion.write().expect("lock de sesión envenenado") = None;
        if self.ruta.exists() {
            if let Err(e) = fs::remove_file(&self.ruta) {
                warn!("⚠️ No se pudo eliminar el archivo de sesión {:?}: {}", self.ruta, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ruta_temporal() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let ruta = dir.path().join("sesion.json");
        (dir, ruta)
    }

    #[test]
    fn test_sesion_persistida_sobrevive_recarga() {
        let (_dir, ruta) = ruta_temporal();

        let store = SessionStore::cargar(ruta.clone());
        assert!(store.token().is_none());
        store.establecer(
            "tok-123".to_string(),
            json!({ "id": 5, "email": "admin@colegio.com", "rol": "SUPERADMIN", "nombre": "Ana" }),
        );

        let recargado = SessionStore::cargar(ruta);
        assert_eq!(recargado.token().as_deref(), Some("tok-123"));
        assert_eq!(recargado.usuario().unwrap().nombre, "Ana");
        assert_eq!(recargado.nombre_para_mostrar(), "Ana");
    }

    #[test]
    fn test_perfil_sin_nombre_cae_al_email() {
        let (_dir, ruta) = ruta_temporal();
        let store = SessionStore::cargar(ruta);
        store.establecer(
            "tok".to_string(),
            json!({ "id": 1, "email": "admin@colegio.com", "rol": "SUPERADMIN", "nombre": "" }),
        );
        assert_eq!(store.nombre_para_mostrar(), "admin@colegio.com");
    }

    #[test]
    fn test_perfil_malformado_degrada_al_generico() {
        let (_dir, ruta) = ruta_temporal();
        let store = SessionStore::cargar(ruta);
        store.establecer("tok".to_string(), json!("no soy un objeto"));

        assert!(store.usuario().is_none());
        assert_eq!(store.nombre_para_mostrar(), "Usuario");
        // El token sigue siendo utilizable aunque el perfil no lo sea.
        assert_eq!(store.token().as_deref(), Some("tok"));
    }

    #[test]
    fn test_archivo_corrupto_deja_sesion_vacia() {
        let (_dir, ruta) = ruta_temporal();
        fs::write(&ruta, "{ esto no es json").unwrap();

        let store = SessionStore::cargar(ruta);
        assert!(store.token().is_none());
        assert_eq!(store.nombre_para_mostrar(), "Usuario");
    }

    #[test]
    fn test_cerrar_elimina_archivo() {
        let (_dir, ruta) = ruta_temporal();
        let store = SessionStore::cargar(ruta.clone());
        store.establecer("tok".to_string(), json!({ "id": 1 }));
        assert!(ruta.exists());

        store.cerrar();
        assert!(store.token().is_none());
        assert!(!ruta.exists());
    }
}
