//! Controladores del panel
//!
//! Cada controlador es el dueño del estado de vista de una pantalla:
//! la colección cacheada de un recurso, el flujo de login o el panel
//! de resumen. Reconcilian las respuestas del servidor contra la copia
//! local; nunca son fuente de verdad.

pub mod auth_controller;
pub mod reconciliacion;
pub mod recurso_controller;
pub mod resumen_controller;

pub use auth_controller::AuthController;
pub use reconciliacion::{reconciliar, Cambio};
pub use recurso_controller::{EstadoColeccion, RecursoController};
pub use resumen_controller::ResumenController;
