use super::*;

/// Tests unsubscribing a stored channel.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn removes_existing_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UfcNotifyChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_notify_channel(db, 111).await?;
    factory::create_notify_channel(db, 222).await?;

    let repo = NotifyChannelRepository::new(db);
    let removed = repo.remove(111).await?;

    assert!(removed);
    assert!(!repo.exists(111).await?);
    assert!(repo.exists(222).await?);

    Ok(())
}

/// Tests unsubscribing a channel that was never subscribed.
///
/// Expected: Ok(false) and other rows untouched
#[tokio::test]
async fn reports_missing_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UfcNotifyChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_notify_channel(db, 222).await?;

    let repo = NotifyChannelRepository::new(db);
    let removed = repo.remove(111).await?;

    assert!(!removed);
    let count = entity::prelude::UfcNotifyChannel::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
