use super::*;

/// Tests creating the first zona.
///
/// Expected: Ok with id 1 and the row persisted
#[tokio::test]
async fn creates_zona_with_first_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Zona).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ZonaRepository::new(db);
    let zona = repo.create(param("Norte", "N")).await?;

    assert_eq!(zona.id, 1);
    assert_eq!(zona.nome, "Norte");
    assert_eq!(zona.letra, "N");

    let stored = Zona::find_by_id(1).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that consecutive creates allocate increasing ids after existing rows.
///
/// Expected: Ok with ids max + 1 and max + 2
#[tokio::test]
async fn allocates_ids_after_existing_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Zona).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::zona::ZonaFactory::new(db).id(5).build().await?;

    let repo = ZonaRepository::new(db);
    let first = repo.create(param("Sul", "S")).await?;
    let second = repo.create(param("Leste", "L")).await?;

    assert_eq!(first.id, 6);
    assert_eq!(second.id, 7);

    Ok(())
}
