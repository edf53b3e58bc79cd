use crate::server::data::id::next_id;
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::zona::ZonaFactory};

/// Tests id allocation on an empty table.
///
/// Expected: Ok(1)
#[tokio::test]
async fn returns_one_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Zona).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let id = next_id(db, entity::zona::Column::Id).await?;

    assert_eq!(id, 1);

    Ok(())
}

/// Tests id allocation above the current maximum.
///
/// Verifies that gaps below the maximum are never reused.
///
/// Expected: Ok(max + 1)
#[tokio::test]
async fn returns_one_past_current_maximum() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Zona).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ZonaFactory::new(db).id(3).build().await?;
    ZonaFactory::new(db).id(41).build().await?;
    ZonaFactory::new(db).id(7).build().await?;

    let id = next_id(db, entity::zona::Column::Id).await?;

    assert_eq!(id, 42);

    Ok(())
}

/// Tests that allocation only considers the queried table.
///
/// Expected: Ok(1) for an empty table while another table holds rows
#[tokio::test]
async fn is_scoped_to_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Zona)
        .with_table(Patio)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ZonaFactory::new(db).id(10).build().await?;

    let id = next_id(db, entity::patio::Column::Id).await?;

    assert_eq!(id, 1);

    Ok(())
}

/// Tests that a failing max query propagates the error.
///
/// Expected: Err when the table does not exist
#[tokio::test]
async fn fails_when_table_is_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = next_id(db, entity::zona::Column::Id).await;

    assert!(result.is_err());

    Ok(())
}
