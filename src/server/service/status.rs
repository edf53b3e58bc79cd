use sea_orm::DatabaseConnection;

use crate::server::{
    data::{status::StatusRepository, status_grupo::StatusGrupoRepository},
    error::AppError,
    model::{
        page::Page,
        status::{SaveStatusParam, Status},
    },
    util::{normalize, pagination::PageRequest},
};

const NOT_FOUND: &str = "Status não encontrado";

pub struct StatusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatusService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(&self, request: PageRequest) -> Result<Page<Status>, AppError> {
        let (statuses, total) = StatusRepository::new(self.db)
            .get_paginated(request)
            .await?;

        Ok(Page::new(statuses, request, total))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Status, AppError> {
        StatusRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    pub async fn create(&self, param: SaveStatusParam) -> Result<Status, AppError> {
        let param = self.validate(param).await?;

        let status = StatusRepository::new(self.db).create(param).await?;

        tracing::info!(
            id = status.id,
            status_grupo_id = status.status_grupo.id,
            "Created status"
        );

        Ok(status)
    }

    pub async fn update(&self, id: i64, param: SaveStatusParam) -> Result<Status, AppError> {
        let repo = StatusRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        let param = self.validate(param).await?;

        Ok(repo.update(id, param).await?)
    }

    /// Deletes a status that no moto is in
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let repo = StatusRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        let motos = repo.get_moto_count(id).await?;
        if motos > 0 {
            return Err(AppError::HasDependents(format!(
                "Não é possível excluir o status: existem {} moto(s) vinculada(s)",
                motos
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    async fn validate(&self, param: SaveStatusParam) -> Result<SaveStatusParam, AppError> {
        let nome = normalize::required(&param.nome)
            .ok_or_else(|| AppError::Validation("O nome do status é obrigatório".to_string()))?;

        if !StatusGrupoRepository::new(self.db)
            .exists(param.status_grupo_id)
            .await?
        {
            return Err(AppError::Validation(format!(
                "Grupo de status {} não existe",
                param.status_grupo_id
            )));
        }

        Ok(SaveStatusParam {
            nome,
            status_grupo_id: param.status_grupo_id,
        })
    }
}
