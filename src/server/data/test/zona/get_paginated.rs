use super::*;

/// Tests that pages are ordered by id and report the full total.
///
/// Expected: Ok with the second page holding the third zona
#[tokio::test]
async fn returns_requested_page_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Zona).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::zona::ZonaFactory::new(db).id(30).build().await?;
    factory::zona::ZonaFactory::new(db).id(10).build().await?;
    factory::zona::ZonaFactory::new(db).id(20).build().await?;

    let repo = ZonaRepository::new(db);

    let (first_page, total) = repo.get_paginated(PageRequest::new(Some(1), Some(2))).await?;
    assert_eq!(total, 3);
    assert_eq!(
        first_page.iter().map(|z| z.id).collect::<Vec<_>>(),
        vec![10, 20]
    );

    let (second_page, total) = repo.get_paginated(PageRequest::new(Some(2), Some(2))).await?;
    assert_eq!(total, 3);
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].id, 30);

    Ok(())
}

/// Tests requesting a page past the last one.
///
/// Expected: Ok with no items and the real total
#[tokio::test]
async fn returns_empty_page_beyond_last() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Zona).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_zona(db).await?;

    let repo = ZonaRepository::new(db);
    let (zonas, total) = repo.get_paginated(PageRequest::new(Some(5), Some(10))).await?;

    assert!(zonas.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
