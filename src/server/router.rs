use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::{
            AvailabilityDto, AvailableRoomsDto, BookingDto, BookingStatsDto, CheckAvailabilityDto,
            CreateBookingDto, PricingDto, RoomOccupancyDto, UnavailableDatesDto, UpdateBookingDto,
        },
        inquiry::{
            ConnectionStatusDto, CreateInquiryDto, InquiryDto, InquiryKind, InquiryPriority,
            InquiryStatus, UpdateInquiryDto, UserUpdateInquiryDto,
        },
        notification::{
            CreateNotificationDto, MarkReadDto, NotificationDto, UpdateNotificationDto,
        },
        review::{CreateReviewDto, ReviewAuthorDto, ReviewDto, UpdateReviewDto},
        user::{LoginDto, LoginResponseDto, SignupDto, UpdateUserDto, UserDto, UserRole},
    },
    server::{
        controller::{booking, inquiry, notification, review, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Spa Booking API", description = "Bookings, inquiries, reviews, notifications and users"),
    paths(
        booking::get_bookings,
        booking::create_booking,
        booking::get_booking_stats,
        booking::get_unavailable_dates,
        booking::check_availability,
        booking::get_available_rooms,
        booking::get_pricing,
        booking::get_booking_by_id,
        booking::update_booking,
        booking::delete_booking,
        inquiry::get_inquiries,
        inquiry::create_inquiry,
        inquiry::test_connection,
        inquiry::get_latest_user_inquiry,
        inquiry::get_user_inquiries,
        inquiry::update_user_inquiry,
        inquiry::delete_user_inquiry,
        inquiry::get_inquiry_by_id,
        inquiry::update_inquiry,
        inquiry::delete_inquiry,
        review::get_reviews,
        review::create_review,
        review::get_reviews_by_product,
        review::get_latest_five_star_reviews,
        review::get_review_by_id,
        review::update_review,
        review::delete_review,
        notification::get_user_notifications,
        notification::create_notification,
        notification::mark_notification_read,
        notification::get_admin_notifications,
        notification::update_notification,
        notification::delete_notification,
        user::get_all_users,
        user::signup,
        user::login,
        user::get_user_by_id,
        user::update_user,
        user::delete_user,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        BookingDto,
        CreateBookingDto,
        UpdateBookingDto,
        CheckAvailabilityDto,
        AvailabilityDto,
        AvailableRoomsDto,
        UnavailableDatesDto,
        PricingDto,
        RoomOccupancyDto,
        BookingStatsDto,
        InquiryDto,
        CreateInquiryDto,
        UpdateInquiryDto,
        UserUpdateInquiryDto,
        ConnectionStatusDto,
        InquiryKind,
        InquiryStatus,
        InquiryPriority,
        ReviewDto,
        ReviewAuthorDto,
        CreateReviewDto,
        UpdateReviewDto,
        NotificationDto,
        CreateNotificationDto,
        UpdateNotificationDto,
        MarkReadDto,
        UserDto,
        UserRole,
        SignupDto,
        LoginDto,
        LoginResponseDto,
        UpdateUserDto,
    )),
    tags(
        (name = booking::BOOKING_TAG, description = "Room bookings, availability and pricing"),
        (name = inquiry::INQUIRY_TAG, description = "Customer inquiries"),
        (name = review::REVIEW_TAG, description = "Customer reviews"),
        (name = notification::NOTIFICATION_TAG, description = "User and broadcast notifications"),
        (name = user::USER_TAG, description = "Accounts and login"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/bookings",
            get(booking::get_bookings).post(booking::create_booking),
        )
        .route("/api/bookings/stats", get(booking::get_booking_stats))
        .route(
            "/api/bookings/unavailable-dates",
            get(booking::get_unavailable_dates),
        )
        .route(
            "/api/bookings/check-availability",
            post(booking::check_availability),
        )
        .route(
            "/api/bookings/available-rooms",
            get(booking::get_available_rooms),
        )
        .route("/api/bookings/pricing", get(booking::get_pricing))
        .route(
            "/api/bookings/{id}",
            get(booking::get_booking_by_id)
                .put(booking::update_booking)
                .delete(booking::delete_booking),
        )
        .route(
            "/api/inquiries",
            get(inquiry::get_inquiries).post(inquiry::create_inquiry),
        )
        .route("/api/inquiries/test", get(inquiry::test_connection))
        .route(
            "/api/inquiries/user/{user_id}",
            get(inquiry::get_latest_user_inquiry),
        )
        .route(
            "/api/inquiries/user/{user_id}/all",
            get(inquiry::get_user_inquiries),
        )
        .route(
            "/api/inquiries/user/{user_id}/{id}",
            put(inquiry::update_user_inquiry).delete(inquiry::delete_user_inquiry),
        )
        .route(
            "/api/inquiries/{id}",
            get(inquiry::get_inquiry_by_id)
                .put(inquiry::update_inquiry)
                .delete(inquiry::delete_inquiry),
        )
        .route(
            "/api/reviews",
            get(review::get_reviews).post(review::create_review),
        )
        .route(
            "/api/reviews/product/{product_id}",
            get(review::get_reviews_by_product),
        )
        .route(
            "/api/reviews/top/five-star/latest",
            get(review::get_latest_five_star_reviews),
        )
        .route(
            "/api/reviews/{id}",
            get(review::get_review_by_id)
                .put(review::update_review)
                .delete(review::delete_review),
        )
        .route(
            "/api/notifications",
            post(notification::create_notification),
        )
        .route(
            "/api/notifications/user/{user_id}",
            get(notification::get_user_notifications),
        )
        .route(
            "/api/notifications/{id}/read",
            put(notification::mark_notification_read),
        )
        .route(
            "/api/notifications/admin",
            get(notification::get_admin_notifications),
        )
        .route(
            "/api/notifications/admin/{id}",
            put(notification::update_notification).delete(notification::delete_notification),
        )
        .route("/api/users", get(user::get_all_users).post(user::signup))
        .route("/api/users/login", post(user::login))
        .route(
            "/api/users/{id}",
            get(user::get_user_by_id)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
