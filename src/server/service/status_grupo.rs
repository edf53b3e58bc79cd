use sea_orm::DatabaseConnection;

use crate::server::{
    data::status_grupo::StatusGrupoRepository,
    error::AppError,
    model::{
        page::Page,
        status_grupo::{SaveStatusGrupoParam, StatusGrupo},
    },
    util::{normalize, pagination::PageRequest},
};

const NOT_FOUND: &str = "Grupo de status não encontrado";

pub struct StatusGrupoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatusGrupoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        request: PageRequest,
    ) -> Result<Page<StatusGrupo>, AppError> {
        let (grupos, total) = StatusGrupoRepository::new(self.db)
            .get_paginated(request)
            .await?;

        Ok(Page::new(grupos, request, total))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<StatusGrupo, AppError> {
        StatusGrupoRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    pub async fn create(&self, param: SaveStatusGrupoParam) -> Result<StatusGrupo, AppError> {
        let param = Self::validate(param)?;

        let grupo = StatusGrupoRepository::new(self.db).create(param).await?;

        tracing::info!(id = grupo.id, "Created status grupo");

        Ok(grupo)
    }

    pub async fn update(
        &self,
        id: i64,
        param: SaveStatusGrupoParam,
    ) -> Result<StatusGrupo, AppError> {
        let repo = StatusGrupoRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        let param = Self::validate(param)?;

        Ok(repo.update(id, param).await?)
    }

    /// Deletes a grupo that owns no status
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let repo = StatusGrupoRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        let statuses = repo.get_status_count(id).await?;
        if statuses > 0 {
            return Err(AppError::HasDependents(format!(
                "Não é possível excluir o grupo de status: existem {} status vinculado(s)",
                statuses
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    fn validate(param: SaveStatusGrupoParam) -> Result<SaveStatusGrupoParam, AppError> {
        let nome = normalize::required(&param.nome).ok_or_else(|| {
            AppError::Validation("O nome do grupo de status é obrigatório".to_string())
        })?;

        Ok(SaveStatusGrupoParam { nome })
    }
}
