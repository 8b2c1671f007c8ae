use super::*;

/// Tests looking up an archived message.
///
/// Expected: Ok(Some) for archived, Ok(None) for unknown
#[tokio::test]
async fn finds_archived_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WallOfShame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WallOfShameRepository::new(db);
    repo.create(param(2001)).await?;

    let found = repo.get_by_message_id(2001).await?;
    assert_eq!(found.map(|e| e.guild_id), Some(9));

    assert!(repo.get_by_message_id(2002).await?.is_none());

    Ok(())
}
