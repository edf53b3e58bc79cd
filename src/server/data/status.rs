use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::id::next_id,
    model::status::{SaveStatusParam, Status},
    util::pagination::PageRequest,
};

pub struct StatusRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatusRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new status and returns it with its grupo
    pub async fn create(&self, param: SaveStatusParam) -> Result<Status, DbErr> {
        let id = next_id(self.db, entity::status::Column::Id).await?;

        entity::status::ActiveModel {
            id: ActiveValue::Set(id),
            nome: ActiveValue::Set(param.nome),
            status_grupo_id: ActiveValue::Set(param.status_grupo_id),
        }
        .insert(self.db)
        .await?;

        self.get_by_id(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Status with id {} not found after creation",
            id
        )))
    }

    /// Gets a status by ID with its grupo
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Status>, DbErr> {
        let Some((status, grupo)) = entity::prelude::Status::find_by_id(id)
            .find_also_related(entity::prelude::StatusGrupo)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(Self::with_grupo(status, grupo)?))
    }

    /// Gets one page of statuses ordered by id, each with its grupo
    pub async fn get_paginated(&self, request: PageRequest) -> Result<(Vec<Status>, u64), DbErr> {
        let paginator = entity::prelude::Status::find()
            .find_also_related(entity::prelude::StatusGrupo)
            .order_by_asc(entity::status::Column::Id)
            .paginate(self.db, request.page_size);

        let total = paginator.num_items().await?;
        if !request.selects_rows(total) {
            return Ok((Vec::new(), total));
        }

        let statuses = paginator
            .fetch_page(request.index())
            .await?
            .into_iter()
            .map(|(status, grupo)| Self::with_grupo(status, grupo))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((statuses, total))
    }

    pub async fn update(&self, id: i64, param: SaveStatusParam) -> Result<Status, DbErr> {
        let status = entity::prelude::Status::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Status with id {} not found",
                id
            )))?;

        let mut active_model: entity::status::ActiveModel = status.into();
        active_model.nome = ActiveValue::Set(param.nome);
        active_model.status_grupo_id = ActiveValue::Set(param.status_grupo_id);
        active_model.update(self.db).await?;

        self.get_by_id(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Status with id {} not found after update",
            id
        )))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbErr> {
        entity::prelude::Status::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn exists(&self, id: i64) -> Result<bool, DbErr> {
        let count = entity::prelude::Status::find()
            .filter(entity::status::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts the motos currently in a status
    pub async fn get_moto_count(&self, id: i64) -> Result<u64, DbErr> {
        entity::prelude::Moto::find()
            .filter(entity::moto::Column::StatusId.eq(id))
            .count(self.db)
            .await
    }

    fn with_grupo(
        status: entity::status::Model,
        grupo: Option<entity::status_grupo::Model>,
    ) -> Result<Status, DbErr> {
        let grupo = grupo.ok_or(DbErr::RecordNotFound(format!(
            "Status grupo with id {} referenced by status {} not found",
            status.status_grupo_id, status.id
        )))?;

        Ok(Status::from_entities(status, grupo))
    }
}
