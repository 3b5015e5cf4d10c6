//! Modelos de dominio
//!
//! Structs que mapean exactamente al schema PostgreSQL más los enums
//! de estado con sus reglas de transición.

pub mod booking;
pub mod company;
pub mod consignee;
pub mod driver;
pub mod rate_card;
pub mod vehicle;

pub use booking::{Booking, BookingStatus};
pub use company::Company;
pub use consignee::{Consignee, ConsigneeStatus};
pub use driver::Driver;
pub use rate_card::RateCard;
pub use vehicle::{derive_display_status, Vehicle, VehicleStatus, VehicleWithLoad};
