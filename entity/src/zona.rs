use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "zona")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub nome: String,
    /// Single uppercase letter identifying the zone.
    pub letra: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::moto::Entity")]
    Moto,
}

impl Related<super::moto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Moto.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
