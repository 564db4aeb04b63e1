//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! testing entity → domain conversion and other logic that needs no persistence.

pub mod booking;
