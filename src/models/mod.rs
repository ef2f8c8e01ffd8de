//! Modelos de recursos del panel
//!
//! Tipos serde alineados al formato de wire del API (camelCase) y el
//! trait `Recurso` que conecta cada tipo con el controlador CRUD
//! genérico: rutas, clave, formulario de alta y normalización de
//! payloads. El servidor asigna los ids; acá solo viaja una copia.

pub mod colegio;
pub mod estudiante;
pub mod relacion;
pub mod stats;
pub mod usuario;

pub use colegio::{Colegio, NuevoColegio};
pub use estudiante::{Estudiante, NuevoEstudiante};
pub use relacion::PadreHijoRelacion;
pub use stats::DashboardStats;
pub use usuario::{Rol, Usuario};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Mensajes de error por recurso, uno por operación. La última falla
/// de la página pisa a la anterior.
pub struct MensajesRecurso {
    pub cargar: &'static str,
    pub crear: &'static str,
    pub actualizar: &'static str,
    pub eliminar: &'static str,
    /// Fila mostrada cuando la colección cargó vacía (nunca en error).
    pub vacio: &'static str,
}

/// Contrato entre un tipo de recurso y el controlador genérico.
pub trait Recurso: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Identidad local del registro: id del servidor, o clave compuesta
    /// en el caso de las relaciones padre-hijo.
    type Clave: Clone + PartialEq + Send + Sync;

    /// Formulario de alta. Mantiene el texto crudo que tipeó el usuario;
    /// la normalización ocurre recién en `payload_crear`.
    type Nuevo: Default + Clone + Send + Sync;

    fn ruta_coleccion() -> &'static str;

    fn ruta_registro(clave: &Self::Clave) -> String;

    fn clave(&self) -> Self::Clave;

    /// Etiqueta usada en la confirmación de borrado.
    fn etiqueta(&self) -> String;

    fn mensajes() -> &'static MensajesRecurso;

    /// Payload de creación normalizado. `Err` es un mensaje para el
    /// usuario y no dispara ninguna llamada de red.
    fn payload_crear(nuevo: &Self::Nuevo) -> Result<Value, String>;

    /// Formulario tras un alta exitosa. Por defecto se resetea entero;
    /// un recurso puede conservar campos de contexto del alta anterior.
    fn nuevo_tras_alta(_anterior: &Self::Nuevo) -> Self::Nuevo {
        Self::Nuevo::default()
    }

    /// Payload de actualización a partir del borrador completo.
    fn payload_actualizar(&self) -> Result<Value, String>;
}
