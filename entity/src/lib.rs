//! SeaORM entity models for the spa booking schema.
//!
//! One module per table. The schema itself is owned by the `migration` crate; these
//! models mirror it column for column.

pub mod prelude;

pub mod booking;
pub mod inquiry;
pub mod notification;
pub mod notification_read;
pub mod review;
pub mod user;
