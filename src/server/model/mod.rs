//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated,
//! normalized request data into the service layer.

pub mod booking;
pub mod inquiry;
pub mod notification;
pub mod review;
pub mod user;
