use super::*;

/// Tests replacing the fields of a zona.
///
/// Expected: Ok with the new values persisted and the id unchanged
#[tokio::test]
async fn updates_zona_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Zona).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let zona = factory::create_zona(db).await?;

    let repo = ZonaRepository::new(db);
    let updated = repo.update(zona.id, param("Oeste", "O")).await?;

    assert_eq!(updated.id, zona.id);
    assert_eq!(updated.nome, "Oeste");
    assert_eq!(updated.letra, "O");

    let stored = repo.get_by_id(zona.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests updating a zona that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_zona() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Zona).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ZonaRepository::new(db);
    let result = repo.update(999, param("Oeste", "O")).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
