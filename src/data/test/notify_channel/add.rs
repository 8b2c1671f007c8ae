use super::*;

/// Tests subscribing a new channel.
///
/// Expected: Ok(true) with the channel stored
#[tokio::test]
async fn adds_new_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UfcNotifyChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotifyChannelRepository::new(db);
    let added = repo.add(123456789).await?;

    assert!(added);
    assert!(repo.exists(123456789).await?);

    Ok(())
}

/// Tests that subscribing twice keeps a single row.
///
/// Expected: Ok(false) on the second add, one row stored
#[tokio::test]
async fn ignores_duplicate_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UfcNotifyChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotifyChannelRepository::new(db);
    repo.add(123456789).await?;
    let added_again = repo.add(123456789).await?;

    assert!(!added_again);

    let count = entity::prelude::UfcNotifyChannel::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests two subscriptions of the same channel running at once.
///
/// Expected: exactly one Ok(true), the other Ok(false), one row stored
#[tokio::test]
async fn concurrent_adds_store_one_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UfcNotifyChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotifyChannelRepository::new(db);
    let (first, second) = tokio::join!(repo.add(555), repo.add(555));

    let mut results = vec![first?, second?];
    results.sort();
    assert_eq!(results, vec![false, true]);

    let count = entity::prelude::UfcNotifyChannel::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
