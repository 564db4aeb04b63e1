use super::*;

/// Tests listing bookings.
///
/// Expected: newest booking first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::booking::create_booking(db).await?;
    let second = factory::booking::create_booking(db).await?;

    let bookings = BookingRepository::new(db).get_all().await?;

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, second.id);
    assert_eq!(bookings[1].id, first.id);

    Ok(())
}

/// Tests listing an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(BookingRepository::new(db).get_all().await?.is_empty());

    Ok(())
}
