//! Back office de bookings de parcels y despacho de flota
//!
//! La lógica vive en esta librería; src/main.rs solo arma el servidor.
//! Los tests de integración en tests/ usan el router y los
//! controllers reales desde aquí.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
