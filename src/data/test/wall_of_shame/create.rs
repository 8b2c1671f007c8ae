use super::*;

/// Tests archiving a message with attachments.
///
/// Expected: Ok with all fields stored and attachments encoded as a JSON array
#[tokio::test]
async fn archives_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WallOfShame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WallOfShameRepository::new(db);
    let entry = repo.create(param(1001)).await?;

    assert_eq!(entry.message_id, 1001);
    assert_eq!(entry.author, "dumbass");
    assert_eq!(entry.content, "pineapple belongs on pizza 🍍");
    assert_eq!(entry.attachment_urls.len(), 2);

    use sea_orm::EntityTrait;
    let stored = entity::prelude::WallOfShame::find_by_id(entry.id)
        .one(db)
        .await?
        .unwrap();
    let urls: Vec<String> = serde_json::from_str(&stored.attachment_urls).unwrap();
    assert_eq!(urls, param(1001).attachment_urls);

    Ok(())
}

/// Tests archiving a message without attachments.
///
/// Expected: Ok with an empty JSON array stored
#[tokio::test]
async fn archives_message_without_attachments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WallOfShame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut without = param(1002);
    without.attachment_urls.clear();
    without.author_url = None;

    let repo = WallOfShameRepository::new(db);
    let entry = repo.create(without).await?;

    assert!(entry.attachment_urls.is_empty());
    assert!(entry.author_url.is_none());

    Ok(())
}

/// Tests that the same message cannot be archived twice.
///
/// Expected: Err from the unique message id index
#[tokio::test]
async fn rejects_duplicate_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WallOfShame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_wall_of_shame_entry(db, 1003).await?;

    let repo = WallOfShameRepository::new(db);
    let result = repo.create(param(1003)).await;

    assert!(matches!(result, Err(AppError::DbErr(ref e)) if is_unique_violation(e)));

    Ok(())
}
