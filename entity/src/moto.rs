use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "moto")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    #[sea_orm(unique)]
    pub placa: String,
    #[sea_orm(unique)]
    pub chassi: String,
    pub qr_code: Option<String>,
    pub data_entrada: DateTimeUtc,
    pub previsao_entrega: Option<DateTimeUtc>,
    /// JSON array of photo references.
    #[sea_orm(column_type = "Text", nullable)]
    pub fotos: Option<String>,
    pub zona_id: i64,
    pub patio_id: i64,
    pub status_id: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub observacoes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::zona::Entity",
        from = "Column::ZonaId",
        to = "super::zona::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Zona,
    #[sea_orm(
        belongs_to = "super::patio::Entity",
        from = "Column::PatioId",
        to = "super::patio::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Patio,
    #[sea_orm(
        belongs_to = "super::status::Entity",
        from = "Column::StatusId",
        to = "super::status::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Status,
}

impl Related<super::zona::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Zona.def()
    }
}

impl Related<super::patio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patio.def()
    }
}

impl Related<super::status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Status.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
