use super::*;

/// Tests the overlap filter of the occupancy query.
///
/// Bookings that end on the requested check-in day or start on the requested
/// check-out day do not overlap and must be left out.
///
/// Expected: only the overlapping booking
#[tokio::test]
async fn returns_only_overlapping_stays() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    // Ends on the 10th, the day the requested stay starts.
    factory::booking::BookingFactory::new(db)
        .room_number(1)
        .stay(date(2024, 3, 3), 7)
        .build()
        .await?;
    let overlapping = factory::booking::BookingFactory::new(db)
        .room_number(2)
        .stay(date(2024, 3, 12), 3)
        .build()
        .await?;
    // Starts on the 17th, the requested check-out.
    factory::booking::BookingFactory::new(db)
        .room_number(3)
        .stay(date(2024, 3, 17), 3)
        .build()
        .await?;

    let occupancies = BookingRepository::new(db)
        .get_occupancies_between(date(2024, 3, 10), date(2024, 3, 17))
        .await?;

    assert_eq!(occupancies.len(), 1);
    assert_eq!(occupancies[0].booking_id, overlapping.id);
    assert_eq!(occupancies[0].room_number, 2);

    Ok(())
}

/// Tests that the unfiltered snapshot contains every booking.
///
/// Expected: one occupancy per booking
#[tokio::test]
async fn full_snapshot_contains_every_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::booking::fill_rooms(db, 4, date(2024, 5, 1), 3).await?;

    let occupancies = BookingRepository::new(db).get_occupancies().await?;

    assert_eq!(occupancies.len(), 4);

    Ok(())
}
