use crate::server::{
    data::patio::PatioRepository, model::patio::SavePatioParam, util::pagination::PageRequest,
};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests the create, update and delete lifecycle of a patio.
///
/// Expected: Ok with each step reflected in subsequent reads
#[tokio::test]
async fn creates_updates_and_deletes_patio() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Patio).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PatioRepository::new(db);

    let patio = repo
        .create(SavePatioParam {
            nome: "Pátio Butantã".to_string(),
        })
        .await?;
    assert_eq!(patio.id, 1);

    let updated = repo
        .update(
            patio.id,
            SavePatioParam {
                nome: "Pátio Lapa".to_string(),
            },
        )
        .await?;
    assert_eq!(updated.nome, "Pátio Lapa");

    repo.delete(patio.id).await?;
    assert!(repo.get_by_id(patio.id).await?.is_none());

    Ok(())
}

/// Tests listing patios.
///
/// Expected: Ok with every patio on the first page
#[tokio::test]
async fn lists_patios() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Patio).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_patio(db).await?;
    factory::create_patio(db).await?;

    let repo = PatioRepository::new(db);
    let (patios, total) = repo.get_paginated(PageRequest::default()).await?;

    assert_eq!(patios.len(), 2);
    assert_eq!(total, 2);
    assert!(patios[0].id < patios[1].id);

    Ok(())
}

/// Tests counting the motos stored in a patio.
///
/// Expected: Ok(1)
#[tokio::test]
async fn counts_motos_in_patio() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_yard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, patio, _, _, _) = factory::helpers::create_moto_with_dependencies(db).await?;

    let repo = PatioRepository::new(db);

    assert_eq!(repo.get_moto_count(patio.id).await?, 1);

    Ok(())
}
