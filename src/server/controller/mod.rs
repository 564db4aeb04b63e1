//! HTTP request handlers.
//!
//! Each handler validates its request DTO, converts it into parameters, calls the
//! matching service and renders the domain result as a DTO. Handlers are documented
//! with `utoipa::path` so they can be listed in the OpenAPI document built by the
//! router.

pub mod booking;
pub mod inquiry;
pub mod notification;
pub mod review;
pub mod user;
