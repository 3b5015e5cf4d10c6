//! Servicios de dominio
//!
//! Orquestación de pricing, creación de bookings y asignación de
//! flota por encima de los repositories.

pub mod assignment_service;
pub mod booking_service;
pub mod pricing_service;

pub use assignment_service::AssignmentService;
pub use booking_service::BookingService;
pub use pricing_service::PricingService;
