use super::*;

/// Tests that only events inside the half-open range are returned, in date order.
///
/// Expected: Ok with the two in-range events, earliest first
#[tokio::test]
async fn returns_events_in_range_ordered() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UfcEvent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc.with_ymd_and_hms(2024, 4, 8, 0, 0, 0).unwrap();
    let end = start + Duration::days(7);

    let later = factory::ufc_event::UfcEventFactory::new(db)
        .event_date(start + Duration::days(5))
        .build()
        .await?;
    let earlier = factory::ufc_event::UfcEventFactory::new(db)
        .event_date(start)
        .build()
        .await?;
    // Exactly at the end bound, excluded
    factory::ufc_event::UfcEventFactory::new(db)
        .event_date(end)
        .build()
        .await?;
    factory::ufc_event::UfcEventFactory::new(db)
        .event_date(start - Duration::seconds(1))
        .build()
        .await?;

    let repo = UfcEventRepository::new(db);
    let events = repo.get_between(start, end).await?;

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}

/// Tests an empty range.
///
/// Expected: Ok with no events
#[tokio::test]
async fn returns_empty_when_no_events_in_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UfcEvent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_ufc_event(db).await?;

    let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
    let repo = UfcEventRepository::new(db);
    let events = repo.get_between(start, start + Duration::days(1)).await?;

    assert!(events.is_empty());

    Ok(())
}
