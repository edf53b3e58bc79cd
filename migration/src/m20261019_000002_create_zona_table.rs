use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Zona::Table)
                    .if_not_exists()
                    .col(big_integer(Zona::Id).primary_key())
                    .col(string(Zona::Nome))
                    .col(string_len(Zona::Letra, 1))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Zona::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Zona {
    Table,
    Id,
    Nome,
    Letra,
}
