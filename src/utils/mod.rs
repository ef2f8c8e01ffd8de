//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores y la normalización de
//! campos de formulario previa a cada envío al API.

pub mod errors;
pub mod normalizacion;
