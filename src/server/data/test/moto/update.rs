use super::*;

/// Tests that an update without data_entrada keeps the stored value.
///
/// Expected: Ok with new placa and the original entry time
#[tokio::test]
async fn keeps_data_entrada_when_not_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_yard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (zona, patio, _, status, moto) =
        factory::helpers::create_moto_with_dependencies(db).await?;

    let repo = MotoRepository::new(db);
    let updated = repo
        .update(moto.id, param("NEW1A11", zona.id, patio.id, status.id))
        .await?;

    assert_eq!(updated.moto.placa, "NEW1A11");
    assert_eq!(updated.moto.data_entrada, moto.data_entrada);

    Ok(())
}

/// Tests moving a moto to another zona with a new entry time.
///
/// Expected: Ok with the new zona loaded and the entry time replaced
#[tokio::test]
async fn moves_moto_to_other_zona() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_yard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, patio, _, status, moto) = factory::helpers::create_moto_with_dependencies(db).await?;
    let other_zona = factory::create_zona(db).await?;
    let entrada = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();

    let repo = MotoRepository::new(db);
    let mut changes = param(&moto.placa, other_zona.id, patio.id, status.id);
    changes.data_entrada = Some(entrada);
    let updated = repo.update(moto.id, changes).await?;

    assert_eq!(updated.zona, other_zona);
    assert_eq!(updated.moto.data_entrada, entrada);

    Ok(())
}

/// Tests deleting a moto.
///
/// Expected: Ok with the row removed
#[tokio::test]
async fn deletes_moto() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_yard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, moto) = factory::helpers::create_moto_with_dependencies(db).await?;

    let repo = MotoRepository::new(db);
    repo.delete(moto.id).await?;

    assert!(Moto::find_by_id(moto.id).one(db).await?.is_none());
    assert!(!repo.exists(moto.id).await?);

    Ok(())
}
