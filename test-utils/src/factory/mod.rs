//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Customize through the builder
//!     let booking = factory::booking::BookingFactory::new(&db)
//!         .room_number(3)
//!         .stay(check_in, 7)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `booking` - Create booking entities
//! - `inquiry` - Create inquiry entities
//! - `review` - Create review entities
//! - `notification` - Create notification entities
//! - `helpers` - Unique id generation and convenience methods

pub mod booking;
pub mod helpers;
pub mod inquiry;
pub mod notification;
pub mod review;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use inquiry::create_inquiry;
pub use notification::create_notification;
pub use review::create_review;
pub use user::create_user;
