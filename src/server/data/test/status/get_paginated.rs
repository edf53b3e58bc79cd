use super::*;

/// Tests that listed statuses carry their grupos.
///
/// Expected: Ok with each status paired with its own grupo
#[tokio::test]
async fn lists_statuses_with_grupos() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_status_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let operacional = factory::create_status_grupo(db).await?;
    let manutencao = factory::create_status_grupo(db).await?;
    let disponivel = factory::create_status(db, operacional.id).await?;
    let em_reparo = factory::create_status(db, manutencao.id).await?;

    let repo = StatusRepository::new(db);
    let (statuses, total) = repo.get_paginated(PageRequest::default()).await?;

    assert_eq!(total, 2);
    assert_eq!(statuses[0].id, disponivel.id);
    assert_eq!(statuses[0].status_grupo.id, operacional.id);
    assert_eq!(statuses[1].id, em_reparo.id);
    assert_eq!(statuses[1].status_grupo.id, manutencao.id);

    Ok(())
}
