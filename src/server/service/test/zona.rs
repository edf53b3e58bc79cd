use super::message;
use crate::server::{
    error::AppError,
    model::zona::SaveZonaParam,
    service::zona::ZonaService,
    util::pagination::PageRequest,
};
use entity::prelude::*;
use test_utils::{builder::TestBuilder, factory};

fn param(nome: &str, letra: &str) -> SaveZonaParam {
    SaveZonaParam {
        nome: nome.to_string(),
        letra: letra.to_string(),
    }
}

/// Tests that the letter is uppercased and the name trimmed on create.
///
/// Expected: Ok with nome "Norte" and letra "N"
#[tokio::test]
async fn normalizes_zona_on_create() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Zona).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let zona = ZonaService::new(db).create(param("  Norte ", "n")).await?;

    assert_eq!(zona.id, 1);
    assert_eq!(zona.nome, "Norte");
    assert_eq!(zona.letra, "N");

    Ok(())
}

/// Tests rejecting letters that are not exactly one character.
///
/// Expected: Err(Validation) for empty and multi-character letters
#[tokio::test]
async fn rejects_invalid_letra() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Zona).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ZonaService::new(db);

    for letra in ["", "  ", "AB"] {
        let result = service.create(param("Norte", letra)).await;
        assert!(matches!(result, Err(AppError::Validation(_))), "{letra:?}");
    }

    Ok(())
}

/// Tests rejecting a blank name before looking at the letter.
///
/// Expected: Err(Validation) about the name
#[tokio::test]
async fn rejects_blank_nome_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Zona).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let err = ZonaService::new(db)
        .create(param(" ", "AB"))
        .await
        .unwrap_err();

    assert_eq!(message(err), "O nome da zona é obrigatório");

    Ok(())
}

/// Tests looking up a missing zona.
///
/// Expected: Err(NotFound) with the zona message
#[tokio::test]
async fn get_by_id_reports_missing_zona() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Zona).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let err = ZonaService::new(db).get_by_id(999).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(message(err), "Zona não encontrada");

    Ok(())
}

/// Tests that updating a missing zona is reported before validation.
///
/// Expected: Err(NotFound) even with an invalid body
#[tokio::test]
async fn update_checks_existence_before_validation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Zona).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ZonaService::new(db).update(999, param("", "")).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a zona holding motos cannot be deleted.
///
/// Expected: Err(HasDependents) and the zona still present
#[tokio::test]
async fn delete_is_blocked_by_motos() -> Result<(), AppError> {
    let test = TestBuilder::new().with_yard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (zona, _, _, _, _) = factory::helpers::create_moto_with_dependencies(db).await?;

    let service = ZonaService::new(db);
    let result = service.delete(zona.id).await;

    assert!(matches!(result, Err(AppError::HasDependents(_))));
    assert!(service.get_by_id(zona.id).await.is_ok());

    Ok(())
}

/// Tests deleting an unused zona.
///
/// Expected: Ok, then NotFound on lookup
#[tokio::test]
async fn deletes_unused_zona() -> Result<(), AppError> {
    let test = TestBuilder::new().with_yard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let zona = factory::create_zona(db).await?;

    let service = ZonaService::new(db);
    service.delete(zona.id).await?;

    assert!(matches!(
        service.get_by_id(zona.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that the page carries the request and total.
///
/// Expected: Ok with total 3 and two items on page 1
#[tokio::test]
async fn pages_zonas() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Zona).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_zona(db).await?;
    }

    let request = PageRequest::new(Some(1), Some(2));
    let page = ZonaService::new(db).get_paginated(request).await?;

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 3);
    assert_eq!(page.request, request);

    Ok(())
}
