//! Estudiantes: código único, colegio al que pertenecen y coordenadas
//! opcionales del domicilio.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{MensajesRecurso, Recurso};
use crate::utils::normalizacion::{
    entero_requerido, numero_opcional, texto_opcional, texto_opcional_de, texto_requerido,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estudiante {
    pub id: i64,
    pub colegio_id: i64,
    pub codigo: String,
    pub ci: Option<String>,
    pub nombre: String,
    pub curso: Option<String>,
    pub home_lat: Option<f64>,
    pub home_lon: Option<f64>,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NuevoEstudiante {
    pub colegio_id: String,
    pub codigo: String,
    pub ci: String,
    pub nombre: String,
    pub curso: String,
    pub home_lat: String,
    pub home_lon: String,
    pub activo: bool,
}

impl Default for NuevoEstudiante {
    fn default() -> Self {
        Self {
            colegio_id: String::new(),
            codigo: String::new(),
            ci: String::new(),
            nombre: String::new(),
            curso: String::new(),
            home_lat: String::new(),
            home_lon: String::new(),
            activo: true,
        }
    }
}

static MENSAJES: MensajesRecurso = MensajesRecurso {
    cargar: "No se pudieron cargar los estudiantes.",
    crear: "No se pudo crear el estudiante.",
    actualizar: "No se pudo actualizar el estudiante.",
    eliminar: "No se pudo eliminar el estudiante.",
    vacio: "No hay estudiantes registrados.",
};

impl Recurso for Estudiante {
    type Clave = i64;
    type Nuevo = NuevoEstudiante;

    fn ruta_coleccion() -> &'static str {
        "/estudiantes"
    }

    fn ruta_registro(clave: &i64) -> String {
        format!("/estudiantes/{}", clave)
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

    fn payload_crear(nuevo: &NuevoEstudiante) -> Result<Value, String> {
        Ok(json!({
            "colegioId": entero_requerido(&nuevo.colegio_id, "colegioId")?,
            "codigo": texto_requerido(&nuevo.codigo, "codigo")?,
            "ci": texto_opcional(&nuevo.ci),
            "nombre": texto_requerido(&nuevo.nombre, "nombre")?,
            "curso": texto_opcional(&nuevo.curso),
            "homeLat": numero_opcional(&nuevo.home_lat, "homeLat")?,
            "homeLon": numero_opcional(&nuevo.home_lon, "homeLon")?,
            "activo": nuevo.activo,
        }))
    }

    fn nuevo_tras_alta(anterior: &NuevoEstudiante) -> NuevoEstudiante {
        // El colegio queda fijado para cargar varios estudiantes seguidos.
        NuevoEstudiante {
            colegio_id: anterior.colegio_id.clone(),
            ..NuevoEstudiante::default()
        }
    }

    fn payload_actualizar(&self) -> Result<Value, String> {
        Ok(json!({
            "colegioId": self.colegio_id,
            "codigo": texto_requerido(&self.codigo, "codigo")?,
            "ci": texto_opcional_de(&self.ci),
            "nombre": texto_requerido(&self.nombre, "nombre")?,
            "curso": texto_opcional_de(&self.curso),
            "homeLat": self.home_lat,
            "homeLon": self.home_lon,
            "activo": self.activo,
        }))
    }
}
