use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "status")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub nome: String,
    pub status_grupo_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::status_grupo::Entity",
        from = "Column::StatusGrupoId",
        to = "super::status_grupo::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    StatusGrupo,
    #[sea_orm(has_many = "super::moto::Entity")]
    Moto,
}

impl Related<super::status_grupo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StatusGrupo.def()
    }
}

impl Related<super::moto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Moto.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
