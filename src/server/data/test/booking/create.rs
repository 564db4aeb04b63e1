use super::*;

/// Tests inserting a booking.
///
/// Verifies that the stay, room and price columns are stored as given and the
/// payment status starts out pending.
///
/// Expected: Ok with booking created
#[tokio::test]
async fn creates_booking_with_pending_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let booking = repo.create(record(date(2024, 12, 1), 7, 3)).await?;

    assert_eq!(booking.package_type, "7 Days Rejuvenation");
    assert_eq!(booking.check_out, date(2024, 12, 8));
    assert_eq!(booking.room_number, 3);
    assert_eq!(booking.total_price, 1710.0);
    assert_eq!(booking.discount, 190.0);
    assert_eq!(booking.payment_status, "Pending");

    Ok(())
}
