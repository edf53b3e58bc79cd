use sea_orm_migration::{prelude::*, schema::*};

use super::m20261019_000004_create_status_grupo_table::StatusGrupo;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Status::Table)
                    .if_not_exists()
                    .col(big_integer(Status::Id).primary_key())
                    .col(string(Status::Nome))
                    .col(big_integer(Status::StatusGrupoId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_status_status_grupo_id")
                            .from(Status::Table, Status::StatusGrupoId)
                            .to(StatusGrupo::Table, StatusGrupo::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Status::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Status {
    Table,
    Id,
    Nome,
    StatusGrupoId,
}
