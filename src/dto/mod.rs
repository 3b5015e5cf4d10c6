//! Data Transfer Objects
//!
//! Shapes explícitos de requests y responses por endpoint. Los
//! requests rechazan campos desconocidos en el boundary.

pub mod auth_dto;
pub mod booking_dto;
pub mod common;
pub mod consignee_dto;
pub mod dashboard_dto;
pub mod driver_dto;
pub mod rate_card_dto;
pub mod vehicle_dto;

pub use common::{ApiResponse, CompanyScope};
