use super::*;

/// Tests clearing the pet table.
///
/// Expected: Ok with the number of deleted rows and an empty table afterwards
#[tokio::test]
async fn deletes_every_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_pets(db, 2).await?;

    let repo = PetRepository::new(db);
    let deleted = repo.delete_all().await?;

    assert_eq!(deleted, 2);
    assert_eq!(entity::prelude::Pet::find().count(db).await?, 0);

    Ok(())
}

#[tokio::test]
async fn deleting_empty_table_removes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetRepository::new(db);

    assert_eq!(repo.delete_all().await?, 0);

    Ok(())
}
