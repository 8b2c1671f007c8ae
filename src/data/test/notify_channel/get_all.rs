use super::*;

/// Tests listing every subscribed channel in subscription order.
///
/// Expected: Ok with parsed channel ids
#[tokio::test]
async fn lists_channels_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UfcNotifyChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_notify_channel(db, 333).await?;
    factory::create_notify_channel(db, 111).await?;

    let repo = NotifyChannelRepository::new(db);
    let channels = repo.get_all().await?;

    let ids: Vec<u64> = channels.iter().map(|c| c.channel_id).collect();
    assert_eq!(ids, vec![333, 111]);

    Ok(())
}

/// Tests listing with no subscriptions.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_channels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UfcNotifyChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotifyChannelRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests listing when a stored channel id is 0.
///
/// Expected: Ok with the zero row skipped and the valid channel kept
#[tokio::test]
async fn skips_zero_channel_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UfcNotifyChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_notify_channel(db, 0).await?;
    factory::create_notify_channel(db, 222).await?;

    let repo = NotifyChannelRepository::new(db);
    let channels = repo.get_all().await?;

    let ids: Vec<u64> = channels.iter().map(|c| c.channel_id).collect();
    assert_eq!(ids, vec![222]);

    Ok(())
}
