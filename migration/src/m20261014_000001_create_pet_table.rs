use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pet::Table)
                    .if_not_exists()
                    .col(pk_auto(Pet::Id))
                    .col(string(Pet::Name))
                    .col(string(Pet::Breed))
                    .col(string_len(Pet::PetType, 16))
                    .col(date(Pet::BirthDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Pet {
    Table,
    Id,
    Name,
    Breed,
    PetType,
    BirthDate,
}
