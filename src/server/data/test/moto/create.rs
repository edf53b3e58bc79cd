use super::*;

/// Tests that a created moto is returned with all referenced rows.
///
/// Expected: Ok with zona, patio, status and status grupo loaded
#[tokio::test]
async fn creates_moto_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_yard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let zona = factory::create_zona(db).await?;
    let patio = factory::create_patio(db).await?;
    let grupo = factory::create_status_grupo(db).await?;
    let status = factory::create_status(db, grupo.id).await?;

    let repo = MotoRepository::new(db);
    let created = repo
        .create(param("ABC1D23", zona.id, patio.id, status.id))
        .await?;

    assert_eq!(created.moto.id, 1);
    assert_eq!(created.moto.placa, "ABC1D23");
    assert_eq!(created.zona, zona);
    assert_eq!(created.patio, patio);
    assert_eq!(created.status, status);
    assert_eq!(created.status_grupo, grupo);

    Ok(())
}

/// Tests that photo references are stored as a JSON array.
///
/// Expected: Ok with the column holding the encoded list
#[tokio::test]
async fn stores_fotos_as_json() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_yard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (zona, patio, _, status, _) = factory::helpers::create_moto_with_dependencies(db).await?;

    let repo = MotoRepository::new(db);
    let mut moto = param("FOT0001", zona.id, patio.id, status.id);
    moto.fotos = Some(vec!["frente.jpg".to_string(), "lateral.jpg".to_string()]);
    let created = repo.create(moto).await?;

    let stored = Moto::find_by_id(created.moto.id).one(db).await?.unwrap();
    assert_eq!(
        stored.fotos.as_deref(),
        Some(r#"["frente.jpg","lateral.jpg"]"#)
    );

    Ok(())
}

/// Tests placa and chassi uniqueness lookups.
///
/// Expected: taken for other motos, free when only the excluded moto holds the value
#[tokio::test]
async fn checks_placa_and_chassi_taken() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_yard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, moto) = factory::helpers::create_moto_with_dependencies(db).await?;

    let repo = MotoRepository::new(db);

    assert!(repo.placa_taken(&moto.placa, None).await?);
    assert!(!repo.placa_taken(&moto.placa, Some(moto.id)).await?);
    assert!(repo.chassi_taken(&moto.chassi, None).await?);
    assert!(!repo.chassi_taken(&moto.chassi, Some(moto.id)).await?);
    assert!(!repo.placa_taken("ZZZ9Z99", None).await?);

    Ok(())
}
