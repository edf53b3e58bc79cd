use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StatusGrupo::Table)
                    .if_not_exists()
                    .col(big_integer(StatusGrupo::Id).primary_key())
                    .col(string(StatusGrupo::Nome))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StatusGrupo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StatusGrupo {
    Table,
    Id,
    Nome,
}
