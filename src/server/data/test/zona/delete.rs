use super::*;

/// Tests deleting a zona.
///
/// Expected: Ok with the row removed
#[tokio::test]
async fn deletes_zona() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Zona).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let zona = factory::create_zona(db).await?;

    let repo = ZonaRepository::new(db);
    repo.delete(zona.id).await?;

    assert!(!repo.exists(zona.id).await?);
    assert!(repo.get_by_id(zona.id).await?.is_none());

    Ok(())
}

/// Tests counting the motos that reference a zona.
///
/// Expected: Ok(1) for the zona in use, Ok(0) for an unused zona
#[tokio::test]
async fn counts_motos_in_zona() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_yard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (zona, _, _, _, _) = factory::helpers::create_moto_with_dependencies(db).await?;
    let unused = factory::create_zona(db).await?;

    let repo = ZonaRepository::new(db);

    assert_eq!(repo.get_moto_count(zona.id).await?, 1);
    assert_eq!(repo.get_moto_count(unused.id).await?, 0);

    Ok(())
}
