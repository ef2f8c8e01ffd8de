//! Relaciones padre-hijo.
//!
//! Identidad compuesta (padreId, estudianteId) con campos
//! desnormalizados para mostrar. Desde el panel solo se listan y se
//! desvinculan; el alta ocurre en la app móvil.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{MensajesRecurso, Recurso, Rol};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PadreHijoRelacion {
    pub padre_id: i64,
    pub padre_nombre: String,
    pub padre_email: String,
    pub padre_rol: Rol,
    pub estudiante_id: i64,
    pub estudiante_nombre: String,
    pub estudiante_codigo: String,
    pub colegio_id: Option<i64>,
    pub colegio_nombre: Option<String>,
    pub vinculacion_desde: DateTime<Utc>,
}

static MENSAJES: MensajesRecurso = MensajesRecurso {
    cargar: "No se pudieron cargar las relaciones padre–hijo.",
    crear: "Las relaciones padre–hijo se crean desde la app móvil.",
    actualizar: "Las relaciones padre–hijo no se editan desde el panel.",
    eliminar: "No se pudo desvincular la relación.",
    vacio: "No hay relaciones registradas.",
};

impl Recurso for PadreHijoRelacion {
    type Clave = (i64, i64);
    type Nuevo = ();

    fn ruta_coleccion() -> &'static str {
        "/admin/parent-children"
    }

    fn ruta_registro(clave: &(i64, i64)) -> String {
        format!("/admin/parent-children/{}/{}", clave.0, clave.1)
    }

    fn clave(&self) -> (i64, i64) {
        (self.padre_id, self.estudiante_id)
    }

    fn etiqueta(&self) -> String {
        format!("{} ↔ {}", self.padre_nombre, self.estudiante_nombre)
    }

    fn mensajes() -> &'static MensajesRecurso {
        &MENSAJES
    }

    fn payload_crear(_nuevo: &()) -> Result<Value, String> {
        Err(MENSAJES.crear.to_string())
    }

    fn payload_actualizar(&self) -> Result<Value, String> {
        Err(MENSAJES.actualizar.to_string())
    }
}
