use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::id::next_id,
    model::status_grupo::{SaveStatusGrupoParam, StatusGrupo},
    util::pagination::PageRequest,
};

pub struct StatusGrupoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatusGrupoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: SaveStatusGrupoParam) -> Result<StatusGrupo, DbErr> {
        let id = next_id(self.db, entity::status_grupo::Column::Id).await?;

        let entity = entity::status_grupo::ActiveModel {
            id: ActiveValue::Set(id),
            nome: ActiveValue::Set(param.nome),
        }
        .insert(self.db)
        .await?;

        Ok(StatusGrupo::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<StatusGrupo>, DbErr> {
        let entity = entity::prelude::StatusGrupo::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(StatusGrupo::from_entity))
    }

    pub async fn get_paginated(
        &self,
        request: PageRequest,
    ) -> Result<(Vec<StatusGrupo>, u64), DbErr> {
        let paginator = entity::prelude::StatusGrupo::find()
            .order_by_asc(entity::status_grupo::Column::Id)
            .paginate(self.db, request.page_size);

        let total = paginator.num_items().await?;
        if !request.selects_rows(total) {
            return Ok((Vec::new(), total));
        }

        let grupos = paginator
            .fetch_page(request.index())
            .await?
            .into_iter()
            .map(StatusGrupo::from_entity)
            .collect();

        Ok((grupos, total))
    }

    pub async fn update(&self, id: i64, param: SaveStatusGrupoParam) -> Result<StatusGrupo, DbErr> {
        let grupo = entity::prelude::StatusGrupo::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Status grupo with id {} not found",
                id
            )))?;

        let mut active_model: entity::status_grupo::ActiveModel = grupo.into();
        active_model.nome = ActiveValue::Set(param.nome);

        let entity = active_model.update(self.db).await?;

        Ok(StatusGrupo::from_entity(entity))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbErr> {
        entity::prelude::StatusGrupo::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn exists(&self, id: i64) -> Result<bool, DbErr> {
        let count = entity::prelude::StatusGrupo::find()
            .filter(entity::status_grupo::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts the statuses owned by a grupo
    pub async fn get_status_count(&self, id: i64) -> Result<u64, DbErr> {
        entity::prelude::Status::find()
            .filter(entity::status::Column::StatusGrupoId.eq(id))
            .count(self.db)
            .await
    }
}
