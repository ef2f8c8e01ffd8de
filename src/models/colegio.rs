//! Colegios del sistema: nombre, dirección y geolocalización.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{MensajesRecurso, Recurso};
use crate::utils::normalizacion::{numero_opcional, texto_opcional, texto_opcional_de, texto_requerido};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Colegio {
    pub id: i64,
    pub nombre: String,
    pub direccion: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
}

/// Formulario de alta. Lat/lon se guardan como texto crudo hasta la
/// normalización: en blanco viajan como `null`, nunca como cero.
#[derive(Debug, Clone)]
pub struct NuevoColegio {
    pub nombre: String,
    pub direccion: String,
    pub lat: String,
    pub lon: String,
    pub activo: bool,
}

impl Default for NuevoColegio {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            direccion: String::new(),
            lat: String::new(),
            lon: String::new(),
            activo: true,
        }
    }
}

static MENSAJES: MensajesRecurso = MensajesRecurso {
    cargar: "No se pudieron cargar los colegios.",
    crear: "No se pudo crear el colegio.",
    actualizar: "No se pudo actualizar el colegio.",
    eliminar: "No se pudo eliminar el colegio.",
    vacio: "No hay colegios registrados.",
};

impl Recurso for Colegio {
    type Clave = i64;
    type Nuevo = NuevoColegio;

    fn ruta_coleccion() -> &'static str {
        "/schools"
    }

    fn ruta_registro(clave: &i64) -> String {
        format!("/schools/{}", clave)
    }

    fn clave(&self) -> i64 {
        self.id
    }

    fn etiqueta(&self) -> String {
        self.nombre.clone()
    }

    fn mensajes() -> &'static MensajesRecurso {
        &MENSAJES
    }

    fn payload_crear(nuevo: &NuevoColegio) -> Result<Value, String> {
        Ok(json!({
            "nombre": texto_requerido(&nuevo.nombre, "nombre")?,
            "direccion": texto_opcional(&nuevo.direccion),
            "lat": numero_opcional(&nuevo.lat, "lat")?,
            "lon": numero_opcional(&nuevo.lon, "lon")?,
            "activo": nuevo.activo,
        }))
    }

    fn payload_actualizar(&self) -> Result<Value, String> {
        Ok(json!({
            "nombre": texto_requerido(&self.nombre, "nombre")?,
            "direccion": texto_opcional_de(&self.direccion),
            "lat": self.lat,
            "lon": self.lon,
            "activo": self.activo,
        }))
    }
}
