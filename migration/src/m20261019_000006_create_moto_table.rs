use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261019_000002_create_zona_table::Zona, m20261019_000003_create_patio_table::Patio,
    m20261019_000005_create_status_table::Status,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Moto::Table)
                    .if_not_exists()
                    .col(big_integer(Moto::Id).primary_key())
                    .col(string_uniq(Moto::Placa))
                    .col(string_uniq(Moto::Chassi))
                    .col(string_null(Moto::QrCode))
                    .col(timestamp_with_time_zone(Moto::DataEntrada))
                    .col(timestamp_with_time_zone_null(Moto::PrevisaoEntrega))
                    .col(text_null(Moto::Fotos))
                    .col(big_integer(Moto::ZonaId))
                    .col(big_integer(Moto::PatioId))
                    .col(big_integer(Moto::StatusId))
                    .col(text_null(Moto::Observacoes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_moto_zona_id")
                            .from(Moto::Table, Moto::ZonaId)
                            .to(Zona::Table, Zona::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_moto_patio_id")
                            .from(Moto::Table, Moto::PatioId)
                            .to(Patio::Table, Patio::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_moto_status_id")
                            .from(Moto::Table, Moto::StatusId)
                            .to(Status::Table, Status::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Moto::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Moto {
    Table,
    Id,
    Placa,
    Chassi,
    QrCode,
    DataEntrada,
    PrevisaoEntrega,
    Fotos,
    ZonaId,
    PatioId,
    StatusId,
    Observacoes,
}
