use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::id::next_id,
    model::patio::{Patio, SavePatioParam},
    util::pagination::PageRequest,
};

pub struct PatioRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PatioRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: SavePatioParam) -> Result<Patio, DbErr> {
        let id = next_id(self.db, entity::patio::Column::Id).await?;

        let entity = entity::patio::ActiveModel {
            id: ActiveValue::Set(id),
            nome: ActiveValue::Set(param.nome),
        }
        .insert(self.db)
        .await?;

        Ok(Patio::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Patio>, DbErr> {
        let entity = entity::prelude::Patio::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Patio::from_entity))
    }

    pub async fn get_paginated(&self, request: PageRequest) -> Result<(Vec<Patio>, u64), DbErr> {
        let paginator = entity::prelude::Patio::find()
            .order_by_asc(entity::patio::Column::Id)
            .paginate(self.db, request.page_size);

        let total = paginator.num_items().await?;
        if !request.selects_rows(total) {
            return Ok((Vec::new(), total));
        }

        let patios = paginator
            .fetch_page(request.index())
            .await?
            .into_iter()
            .map(Patio::from_entity)
            .collect();

        Ok((patios, total))
    }

    pub async fn update(&self, id: i64, param: SavePatioParam) -> Result<Patio, DbErr> {
        let patio = entity::prelude::Patio::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Patio with id {} not found",
                id
            )))?;

        let mut active_model: entity::patio::ActiveModel = patio.into();
        active_model.nome = ActiveValue::Set(param.nome);

        let entity = active_model.update(self.db).await?;

        Ok(Patio::from_entity(entity))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbErr> {
        entity::prelude::Patio::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn exists(&self, id: i64) -> Result<bool, DbErr> {
        let count = entity::prelude::Patio::find()
            .filter(entity::patio::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts the motos stored in a patio
    pub async fn get_moto_count(&self, id: i64) -> Result<u64, DbErr> {
        entity::prelude::Moto::find()
            .filter(entity::moto::Column::PatioId.eq(id))
            .count(self.db)
            .await
    }
}
