use super::*;

/// Tests moving a status to another grupo.
///
/// Expected: Ok with the new grupo embedded
#[tokio::test]
async fn moves_status_to_other_grupo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grupo = factory::create_status_grupo(db).await?;
    let other = factory::create_status_grupo(db).await?;
    let status = factory::create_status(db, grupo.id).await?;

    let repo = StatusRepository::new(db);
    let updated = repo
        .update(
            status.id,
            SaveStatusParam {
                nome: "Bloqueada".to_string(),
                status_grupo_id: other.id,
            },
        )
        .await?;

    assert_eq!(updated.nome, "Bloqueada");
    assert_eq!(updated.status_grupo.id, other.id);

    Ok(())
}

/// Tests counting the motos in a status.
///
/// Expected: Ok(1)
#[tokio::test]
async fn counts_motos_in_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_yard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, status, _) = factory::helpers::create_moto_with_dependencies(db).await?;

    let repo = StatusRepository::new(db);

    assert_eq!(repo.get_moto_count(status.id).await?, 1);
    assert!(repo.exists(status.id).await?);

    Ok(())
}
