use super::*;

/// Tests that a created status is returned with its grupo.
///
/// Expected: Ok with the grupo embedded
#[tokio::test]
async fn creates_status_with_grupo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grupo = factory::status_grupo::StatusGrupoFactory::new(db)
        .nome("Manutenção")
        .build()
        .await?;

    let repo = StatusRepository::new(db);
    let status = repo
        .create(SaveStatusParam {
            nome: "Em reparo".to_string(),
            status_grupo_id: grupo.id,
        })
        .await?;

    assert_eq!(status.id, 1);
    assert_eq!(status.nome, "Em reparo");
    assert_eq!(status.status_grupo.id, grupo.id);
    assert_eq!(status.status_grupo.nome, "Manutenção");

    Ok(())
}

/// Tests looking up a status that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StatusRepository::new(db);

    assert!(repo.get_by_id(12345).await?.is_none());

    Ok(())
}
