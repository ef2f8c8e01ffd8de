//! Configuración del proyecto
//!
//! Este módulo contiene la configuración del entorno: URL base del API
//! y ruta del archivo de sesión.

pub mod environment;

pub use environment::*;
