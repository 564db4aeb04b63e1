use super::*;

/// Tests deleting a booking twice.
///
/// Expected: true the first time, false afterwards
#[tokio::test]
async fn reports_whether_a_row_was_removed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::booking::create_booking(db).await?;
    let repo = BookingRepository::new(db);

    assert!(repo.delete(booking.id).await?);
    assert!(!repo.delete(booking.id).await?);
    assert!(repo.get_by_id(booking.id).await?.is_none());

    Ok(())
}
