use super::*;

#[tokio::test]
async fn returns_existing_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::pet::PetFactory::new(db)
        .name("Rex")
        .breed("Beagle")
        .build()
        .await?;

    let repo = PetRepository::new(db);
    let found = repo.get_by_id(created.id).await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests looking up an id that was never assigned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetRepository::new(db);
    let found = repo.get_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
