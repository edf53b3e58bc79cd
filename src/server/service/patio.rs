use sea_orm::DatabaseConnection;

use crate::server::{
    data::patio::PatioRepository,
    error::AppError,
    model::{
        page::Page,
        patio::{Patio, SavePatioParam},
    },
    util::{normalize, pagination::PageRequest},
};

const NOT_FOUND: &str = "Pátio não encontrado";

pub struct PatioService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PatioService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(&self, request: PageRequest) -> Result<Page<Patio>, AppError> {
        let (patios, total) = PatioRepository::new(self.db).get_paginated(request).await?;

        Ok(Page::new(patios, request, total))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Patio, AppError> {
        PatioRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    pub async fn create(&self, param: SavePatioParam) -> Result<Patio, AppError> {
        let param = Self::validate(param)?;

        let patio = PatioRepository::new(self.db).create(param).await?;

        tracing::info!(id = patio.id, "Created patio");

        Ok(patio)
    }

    pub async fn update(&self, id: i64, param: SavePatioParam) -> Result<Patio, AppError> {
        let repo = PatioRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        let param = Self::validate(param)?;

        Ok(repo.update(id, param).await?)
    }

    /// Deletes a patio that no moto references
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let repo = PatioRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        let motos = repo.get_moto_count(id).await?;
        if motos > 0 {
            return Err(AppError::HasDependents(format!(
                "Não é possível excluir o pátio: existem {} moto(s) vinculada(s)",
                motos
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    fn validate(param: SavePatioParam) -> Result<SavePatioParam, AppError> {
        let nome = normalize::required(&param.nome)
            .ok_or_else(|| AppError::Validation("O nome do pátio é obrigatório".to_string()))?;

        Ok(SavePatioParam { nome })
    }
}
