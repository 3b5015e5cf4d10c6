//! Controladores HTTP
//!
//! Validación de requests y orquestación por recurso. Los handlers de
//! axum viven en routes/; aquí solo llega input ya deserializado.

pub mod booking_controller;
pub mod company_controller;
pub mod consignee_controller;
pub mod dashboard_controller;
pub mod driver_controller;
pub mod rate_card_controller;
pub mod vehicle_controller;

pub use booking_controller::BookingController;
pub use company_controller::CompanyController;
pub use consignee_controller::ConsigneeController;
pub use dashboard_controller::DashboardController;
pub use driver_controller::DriverController;
pub use rate_card_controller::RateCardController;
pub use vehicle_controller::VehicleController;
