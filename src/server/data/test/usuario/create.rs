use super::*;

/// Tests creating a usuario with a precomputed hash.
///
/// Expected: Ok with the hash stored as given
#[tokio::test]
async fn creates_usuario() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Usuario).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UsuarioRepository::new(db);
    let usuario = repo
        .create("admin".to_string(), "$2b$04$hash".to_string())
        .await?;

    assert_eq!(usuario.id, 1);
    assert_eq!(usuario.senha_hash, "$2b$04$hash");
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests username uniqueness lookups.
///
/// Expected: taken for other usuarios, free when only the excluded usuario holds it
#[tokio::test]
async fn checks_username_taken() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Usuario).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let usuario = factory::usuario::UsuarioFactory::new(db)
        .username("operador")
        .build()
        .await?;

    let repo = UsuarioRepository::new(db);

    assert!(repo.username_taken("operador", None).await?);
    assert!(!repo.username_taken("operador", Some(usuario.id)).await?);
    assert!(!repo.username_taken("outro", None).await?);

    Ok(())
}

/// Tests paging through usuarios.
///
/// Expected: Ok with one usuario per page and total 2
#[tokio::test]
async fn pages_usuarios() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Usuario).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::usuario::UsuarioFactory::new(db).id(1).build().await?;
    factory::usuario::UsuarioFactory::new(db).id(2).build().await?;

    let repo = UsuarioRepository::new(db);
    let (usuarios, total) = repo.get_paginated(PageRequest::new(Some(2), Some(1))).await?;

    assert_eq!(total, 2);
    assert_eq!(usuarios.len(), 1);
    assert_eq!(usuarios[0].id, 2);

    Ok(())
}
