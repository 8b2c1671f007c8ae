use super::*;

/// Tests finding a stored event by its exact name.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_event_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UfcEvent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::ufc_event::UfcEventFactory::new(db)
        .event_name("UFC 300: Pereira vs. Hill")
        .build()
        .await?;

    let repo = UfcEventRepository::new(db);
    let found = repo.get_by_name("UFC 300: Pereira vs. Hill").await?;

    let found = found.expect("event should exist");
    assert_eq!(found.id, stored.id);
    assert_eq!(found.event_url, stored.event_url);

    Ok(())
}

/// Tests that an unknown name yields None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UfcEvent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_ufc_event(db).await?;

    let repo = UfcEventRepository::new(db);
    assert!(repo.get_by_name("UFC 999").await?.is_none());

    Ok(())
}
