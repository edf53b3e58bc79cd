use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::id::next_id,
    model::zona::{SaveZonaParam, Zona},
    util::pagination::PageRequest,
};

pub struct ZonaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ZonaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new zona with the next available id
    pub async fn create(&self, param: SaveZonaParam) -> Result<Zona, DbErr> {
        let id = next_id(self.db, entity::zona::Column::Id).await?;

        let entity = entity::zona::ActiveModel {
            id: ActiveValue::Set(id),
            nome: ActiveValue::Set(param.nome),
            letra: ActiveValue::Set(param.letra),
        }
        .insert(self.db)
        .await?;

        Ok(Zona::from_entity(entity))
    }

    /// Gets a zona by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Zona>, DbErr> {
        let entity = entity::prelude::Zona::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Zona::from_entity))
    }

    /// Gets one page of zonas ordered by id, along with the total count
    pub async fn get_paginated(&self, request: PageRequest) -> Result<(Vec<Zona>, u64), DbErr> {
        let paginator = entity::prelude::Zona::find()
            .order_by_asc(entity::zona::Column::Id)
            .paginate(self.db, request.page_size);

        let total = paginator.num_items().await?;
        if !request.selects_rows(total) {
            return Ok((Vec::new(), total));
        }

        let zonas = paginator
            .fetch_page(request.index())
            .await?
            .into_iter()
            .map(Zona::from_entity)
            .collect();

        Ok((zonas, total))
    }

    /// Replaces the name and letter of a zona
    pub async fn update(&self, id: i64, param: SaveZonaParam) -> Result<Zona, DbErr> {
        let zona = entity::prelude::Zona::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Zona with id {} not found",
                id
            )))?;

        let mut active_model: entity::zona::ActiveModel = zona.into();
        active_model.nome = ActiveValue::Set(param.nome);
        active_model.letra = ActiveValue::Set(param.letra);

        let entity = active_model.update(self.db).await?;

        Ok(Zona::from_entity(entity))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbErr> {
        entity::prelude::Zona::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn exists(&self, id: i64) -> Result<bool, DbErr> {
        let count = entity::prelude::Zona::find()
            .filter(entity::zona::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts the motos parked in a zona
    pub async fn get_moto_count(&self, id: i64) -> Result<u64, DbErr> {
        entity::prelude::Moto::find()
            .filter(entity::moto::Column::ZonaId.eq(id))
            .count(self.db)
            .await
    }
}
