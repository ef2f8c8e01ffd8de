//! Panel de administración del sistema de monitoreo de buses escolares.
//!
//! Cliente del API REST remoto: gateway HTTP, sesión persistida,
//! controladores CRUD por recurso y shell de navegación. La vista
//! (terminal) vive en el binario; aquí no hay lógica de negocio,
//! el servidor es siempre la fuente de verdad.

pub mod api;
pub mod config;
pub mod controllers;
pub mod models;
pub mod nav;
pub mod session;
pub mod utils;
