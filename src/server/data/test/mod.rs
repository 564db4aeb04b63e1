mod booking;
mod inquiry;
mod notification;
mod review;
mod user;
