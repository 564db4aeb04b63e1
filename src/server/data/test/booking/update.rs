use super::*;

/// Tests overwriting a booking.
///
/// Expected: Ok(Some) with the new stay and room
#[tokio::test]
async fn overwrites_stay_and_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::booking::create_booking(db).await?;

    let updated = BookingRepository::new(db)
        .update(existing.id, record(date(2025, 1, 5), 7, 9))
        .await?
        .unwrap();

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.check_in, date(2025, 1, 5));
    assert_eq!(updated.room_number, 9);
    assert_eq!(updated.guest_count, 2);

    Ok(())
}

/// Tests updating a booking that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingRepository::new(db)
        .update(404, record(date(2025, 1, 5), 7, 1))
        .await?;

    assert!(result.is_none());

    Ok(())
}
