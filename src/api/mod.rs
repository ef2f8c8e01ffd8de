//! Acceso al API remoto
//!
//! Todo el I/O de red del panel pasa por el gateway de este módulo.

pub mod gateway;

pub use gateway::ApiGateway;
