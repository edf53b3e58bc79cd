use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::id::next_id, model::usuario::Usuario, util::pagination::PageRequest,
};

pub struct UsuarioRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsuarioRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new usuario from an already hashed password
    pub async fn create(&self, username: String, senha_hash: String) -> Result<Usuario, DbErr> {
        let id = next_id(self.db, entity::usuario::Column::Id).await?;

        let entity = entity::usuario::ActiveModel {
            id: ActiveValue::Set(id),
            username: ActiveValue::Set(username),
            senha_hash: ActiveValue::Set(senha_hash),
        }
        .insert(self.db)
        .await?;

        Ok(Usuario::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Usuario>, DbErr> {
        let entity = entity::prelude::Usuario::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Usuario::from_entity))
    }

    pub async fn get_paginated(&self, request: PageRequest) -> Result<(Vec<Usuario>, u64), DbErr> {
        let paginator = entity::prelude::Usuario::find()
            .order_by_asc(entity::usuario::Column::Id)
            .paginate(self.db, request.page_size);

        let total = paginator.num_items().await?;
        if !request.selects_rows(total) {
            return Ok((Vec::new(), total));
        }

        let usuarios = paginator
            .fetch_page(request.index())
            .await?
            .into_iter()
            .map(Usuario::from_entity)
            .collect();

        Ok((usuarios, total))
    }

    /// Updates the username and, when provided, the password hash
    pub async fn update(
        &self,
        id: i64,
        username: String,
        senha_hash: Option<String>,
    ) -> Result<Usuario, DbErr> {
        let usuario = entity::prelude::Usuario::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Usuario with id {} not found",
                id
            )))?;

        let mut active_model: entity::usuario::ActiveModel = usuario.into();
        active_model.username = ActiveValue::Set(username);
        if let Some(senha_hash) = senha_hash {
            active_model.senha_hash = ActiveValue::Set(senha_hash);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Usuario::from_entity(entity))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbErr> {
        entity::prelude::Usuario::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn exists(&self, id: i64) -> Result<bool, DbErr> {
        let count = entity::prelude::Usuario::find()
            .filter(entity::usuario::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a username is used by any usuario other than `exclude_id`
    pub async fn username_taken(
        &self,
        username: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Usuario::find()
            .filter(entity::usuario::Column::Username.eq(username));

        if let Some(id) = exclude_id {
            query = query.filter(entity::usuario::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Usuario::find().count(self.db).await
    }
}
