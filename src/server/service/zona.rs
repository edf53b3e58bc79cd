use sea_orm::DatabaseConnection;

use crate::server::{
    data::zona::ZonaRepository,
    error::AppError,
    model::{
        page::Page,
        zona::{SaveZonaParam, Zona},
    },
    util::{normalize, pagination::PageRequest},
};

const NOT_FOUND: &str = "Zona não encontrada";

pub struct ZonaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ZonaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(&self, request: PageRequest) -> Result<Page<Zona>, AppError> {
        let (zonas, total) = ZonaRepository::new(self.db).get_paginated(request).await?;

        Ok(Page::new(zonas, request, total))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Zona, AppError> {
        ZonaRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Creates a zona after trimming the name and uppercasing the letter
    pub async fn create(&self, param: SaveZonaParam) -> Result<Zona, AppError> {
        let param = Self::validate(param)?;

        let zona = ZonaRepository::new(self.db).create(param).await?;

        tracing::info!(id = zona.id, letra = %zona.letra, "Created zona");

        Ok(zona)
    }

    pub async fn update(&self, id: i64, param: SaveZonaParam) -> Result<Zona, AppError> {
        let repo = ZonaRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        let param = Self::validate(param)?;

        Ok(repo.update(id, param).await?)
    }

    /// Deletes a zona that no moto references
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let repo = ZonaRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        let motos = repo.get_moto_count(id).await?;
        if motos > 0 {
            return Err(AppError::HasDependents(format!(
                "Não é possível excluir a zona: existem {} moto(s) vinculada(s)",
                motos
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    fn validate(param: SaveZonaParam) -> Result<SaveZonaParam, AppError> {
        let nome = normalize::required(&param.nome)
            .ok_or_else(|| AppError::Validation("O nome da zona é obrigatório".to_string()))?;

        let letra = normalize::required_upper(&param.letra)
            .filter(|letra| letra.chars().count() == 1)
            .ok_or_else(|| {
                AppError::Validation(
                    "A letra da zona deve conter exatamente um caractere".to_string(),
                )
            })?;

        Ok(SaveZonaParam { nome, letra })
    }
}
