use super::*;

/// Tests that an empty table yields no response.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CannedResponse)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CannedResponseRepository::new(db);

    assert!(repo.random().await?.is_none());

    Ok(())
}

/// Tests that the only stored response is always picked.
///
/// Expected: Ok(Some) with that response
#[tokio::test]
async fn returns_single_response() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CannedResponse)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_canned_response(db, "skill issue").await?;

    let repo = CannedResponseRepository::new(db);

    assert_eq!(repo.random().await?.as_deref(), Some("skill issue"));

    Ok(())
}

/// Tests that every pick comes from the stored set and the set is reachable.
///
/// Expected: Ok with only stored responses returned, more than one distinct
#[tokio::test]
async fn picks_from_stored_responses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CannedResponse)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CannedResponseRepository::new(db);
    let stored = ["no", "yes", "maybe"];
    for response in stored {
        repo.create(response).await?;
    }

    let mut seen = std::collections::HashSet::new();
    for _ in 0..100 {
        let picked = repo.random().await?.unwrap();
        assert!(stored.contains(&picked.as_str()));
        seen.insert(picked);
    }

    assert!(seen.len() > 1);

    Ok(())
}
