//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y generación de números LR.

pub mod errors;
pub mod lr;
pub mod validation;
