//! Usuarios del sistema y sus roles.
//!
//! El rol es un conjunto cerrado, modelado como enum para tener
//! chequeo exhaustivo al renderizar. Los usuarios no se crean desde el
//! panel: solo se listan, editan y eliminan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

use super::{MensajesRecurso, Recurso};
use crate::utils::normalizacion::{texto_opcional_de, texto_requerido};

/// Rol dentro del sistema de monitoreo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rol {
    Superadmin,
    AdminColegio,
    Conductor,
    Padre,
}

impl Rol {
    pub const TODOS: [Rol; 4] = [Rol::Superadmin, Rol::AdminColegio, Rol::Conductor, Rol::Padre];

    /// Nombre de wire, igual al que viaja por el API.
    pub fn como_str(&self) -> &'static str {
        match self {
            Rol::Superadmin => "SUPERADMIN",
            Rol::AdminColegio => "ADMIN_COLEGIO",
            Rol::Conductor => "CONDUCTOR",
            Rol::Padre => "PADRE",
        }
    }
}

impl fmt::Display for Rol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.como_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i64,
    pub rol: Rol,
    pub email: String,
    pub nombre: String,
    pub telefono: Option<String>,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
}

static MENSAJES: MensajesRecurso = MensajesRecurso {
    cargar: "No se pudieron cargar los usuarios.",
    crear: "Los usuarios se registran desde la app móvil.",
    actualizar: "No se pudo actualizar el usuario.",
    eliminar: "No se pudo eliminar el usuario.",
    vacio: "No hay usuarios registrados.",
};

impl Recurso for Usuario {
    type Clave = i64;
    type Nuevo = ();

    fn ruta_coleccion() -> &'static str {
        "/usuarios"
    }

    fn ruta_registro(clave: &i64) -> String {
        format!("/usuarios/{}", clave)
    }

    fn clave(&self) -> i64 {
        self.id
    }

    fn etiqueta(&self) -> String {
        format!("{} <{}>", self.nombre, self.email)
    }

    fn mensajes() -> &'static MensajesRecurso {
        &MENSAJES
    }

    fn payload_crear(_nuevo: &()) -> Result<Value, String> {
        Err(MENSAJES.crear.to_string())
    }

    fn payload_actualizar(&self) -> Result<Value, String> {
        // El PATCH lleva también los campos sin cambios.
        Ok(json!({
            "nombre": texto_requerido(&self.nombre, "nombre")?,
            "email": texto_requerido(&self.email, "email")?,
            "telefono": texto_opcional_de(&self.telefono),
            "rol": self.rol,
            "activo": self.activo,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rol_serde_wire() {
        assert_eq!(serde_json::to_value(Rol::AdminColegio).unwrap(), "ADMIN_COLEGIO");
        let rol: Rol = serde_json::from_value(serde_json::json!("CONDUCTOR")).unwrap();
        assert_eq!(rol, Rol::Conductor);
    }

    #[test]
    fn test_rol_desconocido_es_error() {
        assert!(serde_json::from_value::<Rol>(serde_json::json!("VISITANTE")).is_err());
    }
}
