use super::*;

/// Tests that every listed moto carries its relations.
///
/// Expected: Ok with each moto paired with the rows it references
#[tokio::test]
async fn lists_motos_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_yard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (zona_a, _, _, _, moto_a) = factory::helpers::create_moto_with_dependencies(db).await?;
    let (zona_b, _, grupo_b, _, moto_b) =
        factory::helpers::create_moto_with_dependencies(db).await?;

    let repo = MotoRepository::new(db);
    let (motos, total) = repo.get_paginated(PageRequest::default(), None).await?;

    assert_eq!(total, 2);
    assert_eq!(motos[0].moto.id, moto_a.id);
    assert_eq!(motos[0].zona.id, zona_a.id);
    assert_eq!(motos[1].moto.id, moto_b.id);
    assert_eq!(motos[1].zona.id, zona_b.id);
    assert_eq!(motos[1].status_grupo.id, grupo_b.id);

    Ok(())
}

/// Tests filtering by a placa fragment.
///
/// Expected: Ok with only motos whose placa contains the fragment
#[tokio::test]
async fn filters_by_placa_fragment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_yard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (zona, patio, _, status, _) = factory::helpers::create_moto_with_dependencies(db).await?;
    factory::moto::MotoFactory::new(db, zona.id, patio.id, status.id)
        .placa("ABC1D23")
        .build()
        .await?;
    factory::moto::MotoFactory::new(db, zona.id, patio.id, status.id)
        .placa("XYZ1C23")
        .build()
        .await?;

    let repo = MotoRepository::new(db);
    let (motos, total) = repo
        .get_paginated(PageRequest::default(), Some("1D2"))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(motos[0].moto.placa, "ABC1D23");

    Ok(())
}

/// Tests an empty listing.
///
/// Expected: Ok with no motos and total 0
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_yard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MotoRepository::new(db);
    let (motos, total) = repo.get_paginated(PageRequest::default(), None).await?;

    assert!(motos.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
