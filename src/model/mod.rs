//! Wire-level DTOs shared by every resource.
//!
//! These types define the JSON request and response bodies of the HTTP API. The server
//! converts them to and from its domain models at the controller boundary.

pub mod api;
pub mod booking;
pub mod inquiry;
pub mod notification;
pub mod review;
pub mod user;
