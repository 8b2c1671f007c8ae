use super::*;

fn param(name: &str) -> UpsertUfcEventParam {
    UpsertUfcEventParam {
        event_name: name.to_string(),
        event_date: Utc.with_ymd_and_hms(2024, 4, 14, 2, 0, 0).unwrap(),
        event_url: Some("https://www.ufc.com/event/ufc-300".to_string()),
        event_description: Some("Pereira vs. Hill".to_string()),
        event_location: Some("Las Vegas, NV".to_string()),
    }
}

/// Tests inserting a new event.
///
/// Expected: Ok(Inserted) with one stored row
#[tokio::test]
async fn inserts_new_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UfcEvent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UfcEventRepository::new(db);
    let outcome = repo.upsert(param("UFC 300")).await?;

    assert_eq!(outcome, UpsertOutcome::Inserted);

    let stored = repo.get_by_name("UFC 300").await?.unwrap();
    assert_eq!(stored.event_location.as_deref(), Some("Las Vegas, NV"));
    assert_eq!(stored.created_at, stored.updated_at);

    Ok(())
}

/// Tests that upserting identical details leaves the row alone.
///
/// Expected: Ok(Unchanged) and updated_at untouched
#[tokio::test]
async fn leaves_identical_event_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UfcEvent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UfcEventRepository::new(db);
    repo.upsert(param("UFC 300")).await?;
    let before = repo.get_by_name("UFC 300").await?.unwrap();

    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    let outcome = repo.upsert(param("UFC 300")).await?;
    let after = repo.get_by_name("UFC 300").await?.unwrap();

    assert_eq!(outcome, UpsertOutcome::Unchanged);
    assert_eq!(after.updated_at, before.updated_at);

    Ok(())
}

/// Tests that a changed detail updates the stored row in place.
///
/// Expected: Ok(Updated), same id, created_at preserved
#[tokio::test]
async fn updates_changed_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UfcEvent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UfcEventRepository::new(db);
    repo.upsert(param("UFC 300")).await?;
    let original = repo.get_by_name("UFC 300").await?.unwrap();

    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    let mut moved = param("UFC 300");
    moved.event_date = moved.event_date + Duration::hours(2);
    moved.event_location = None;

    let outcome = repo.upsert(moved.clone()).await?;
    let updated = repo.get_by_name("UFC 300").await?.unwrap();

    assert_eq!(outcome, UpsertOutcome::Updated);
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.event_date, moved.event_date);
    assert_eq!(updated.event_location, None);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);

    let count = entity::prelude::UfcEvent::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
