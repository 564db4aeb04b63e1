use super::*;

/// Tests the first code on an empty table.
///
/// Expected: INQ001
#[tokio::test]
async fn starts_at_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inquiry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(InquiryRepository::new(db).next_code().await?, "INQ001");

    Ok(())
}

/// Tests that the sequence follows the numerically highest code.
///
/// "INQ1000" sorts before "INQ999" as text, so the numeric value must decide.
///
/// Expected: INQ1001
#[tokio::test]
async fn follows_numerically_highest_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inquiry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for code in ["INQ999", "INQ1000", "INQ005"] {
        factory::inquiry::InquiryFactory::new(db)
            .inquiry_code(code)
            .build()
            .await?;
    }

    assert_eq!(InquiryRepository::new(db).next_code().await?, "INQ1001");

    Ok(())
}
