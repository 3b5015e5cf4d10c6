//! Capa de acceso a datos
//!
//! Un repository por entidad, cada uno con su PgPool clonado. Los
//! UPDATEs condicionados de bookings y consignees hacen cumplir los
//! workflows sin transacciones multi-tabla.

pub mod booking_repository;
pub mod company_repository;
pub mod consignee_repository;
pub mod dashboard_repository;
pub mod driver_repository;
pub mod rate_card_repository;
pub mod vehicle_repository;

pub use booking_repository::{BookingRepository, NewBooking};
pub use company_repository::CompanyRepository;
pub use consignee_repository::ConsigneeRepository;
pub use dashboard_repository::DashboardRepository;
pub use driver_repository::DriverRepository;
pub use rate_card_repository::RateCardRepository;
pub use vehicle_repository::VehicleRepository;
