pub use super::booking::Entity as Booking;
pub use super::inquiry::Entity as Inquiry;
pub use super::notification::Entity as Notification;
pub use super::notification_read::Entity as NotificationRead;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
