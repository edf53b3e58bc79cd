use super::*;

/// Tests that omitting the hash on update keeps the stored one.
///
/// Expected: Ok with new username and the original hash
#[tokio::test]
async fn keeps_hash_when_not_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Usuario).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let usuario = factory::create_usuario(db).await?;

    let repo = UsuarioRepository::new(db);
    let updated = repo
        .update(usuario.id, "renomeado".to_string(), None)
        .await?;

    assert_eq!(updated.username, "renomeado");
    assert_eq!(updated.senha_hash, usuario.senha_hash);

    Ok(())
}

/// Tests replacing the hash on update.
///
/// Expected: Ok with the new hash stored
#[tokio::test]
async fn replaces_hash_when_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Usuario).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let usuario = factory::create_usuario(db).await?;

    let repo = UsuarioRepository::new(db);
    repo.update(
        usuario.id,
        usuario.username.clone(),
        Some("novo-hash".to_string()),
    )
    .await?;

    let stored = Usuario::find_by_id(usuario.id).one(db).await?.unwrap();
    assert_eq!(stored.senha_hash, "novo-hash");

    Ok(())
}

/// Tests deleting a usuario.
///
/// Expected: Ok with the row removed
#[tokio::test]
async fn deletes_usuario() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Usuario).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let usuario = factory::create_usuario(db).await?;

    let repo = UsuarioRepository::new(db);
    repo.delete(usuario.id).await?;

    assert!(!repo.exists(usuario.id).await?);

    Ok(())
}
