use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        moto::MotoRepository, patio::PatioRepository, status::StatusRepository,
        zona::ZonaRepository,
    },
    error::AppError,
    model::{
        moto::{Moto, MotoEntities, SaveMotoParam},
        page::Page,
    },
    util::{normalize, pagination::PageRequest},
};

const NOT_FOUND: &str = "Moto não encontrada";

pub struct MotoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MotoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of motos, optionally narrowed to placas containing `placa`
    ///
    /// The filter is case-insensitive; a blank filter lists every moto.
    pub async fn get_paginated(
        &self,
        request: PageRequest,
        placa: Option<String>,
    ) -> Result<Page<Moto>, AppError> {
        let placa = placa.as_deref().and_then(normalize::required_upper);

        let (motos, total) = MotoRepository::new(self.db)
            .get_paginated(request, placa.as_deref())
            .await?;

        let motos = motos
            .into_iter()
            .map(Self::from_entities)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(motos, request, total))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Moto, AppError> {
        let entities = MotoRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

        Self::from_entities(entities)
    }

    /// Creates a moto after normalization, reference and uniqueness checks
    pub async fn create(&self, param: SaveMotoParam) -> Result<Moto, AppError> {
        let param = self.validate(param, None).await?;

        let entities = MotoRepository::new(self.db).create(param).await?;

        tracing::info!(id = entities.moto.id, placa = %entities.moto.placa, "Created moto");

        Self::from_entities(entities)
    }

    pub async fn update(&self, id: i64, param: SaveMotoParam) -> Result<Moto, AppError> {
        let repo = MotoRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        let param = self.validate(param, Some(id)).await?;

        Self::from_entities(repo.update(id, param).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let repo = MotoRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }

    fn from_entities(entities: MotoEntities) -> Result<Moto, AppError> {
        Ok(Moto::from_entities(entities)?)
    }

    /// Runs the required, reference and uniqueness checks in that order
    async fn validate(
        &self,
        param: SaveMotoParam,
        current_id: Option<i64>,
    ) -> Result<SaveMotoParam, AppError> {
        let placa = normalize::required_upper(&param.placa)
            .ok_or_else(|| AppError::Validation("A placa é obrigatória".to_string()))?;
        let chassi = normalize::required_upper(&param.chassi)
            .ok_or_else(|| AppError::Validation("O chassi é obrigatório".to_string()))?;

        if !ZonaRepository::new(self.db).exists(param.zona_id).await? {
            return Err(AppError::Validation(format!(
                "Zona {} não existe",
                param.zona_id
            )));
        }

        if !PatioRepository::new(self.db).exists(param.patio_id).await? {
            return Err(AppError::Validation(format!(
                "Pátio {} não existe",
                param.patio_id
            )));
        }

        if !StatusRepository::new(self.db).exists(param.status_id).await? {
            return Err(AppError::Validation(format!(
                "Status {} não existe",
                param.status_id
            )));
        }

        let repo = MotoRepository::new(self.db);

        if repo.placa_taken(&placa, current_id).await? {
            return Err(AppError::Validation(format!(
                "Já existe uma moto com a placa {}",
                placa
            )));
        }

        if repo.chassi_taken(&chassi, current_id).await? {
            return Err(AppError::Validation(format!(
                "Já existe uma moto com o chassi {}",
                chassi
            )));
        }

        let fotos = param.fotos.map(|fotos| {
            fotos
                .iter()
                .map(String::as_str)
                .filter_map(normalize::required)
                .collect::<Vec<_>>()
        });

        Ok(SaveMotoParam {
            placa,
            chassi,
            qr_code: normalize::optional(param.qr_code),
            data_entrada: param.data_entrada,
            previsao_entrega: param.previsao_entrega,
            fotos,
            zona_id: param.zona_id,
            patio_id: param.patio_id,
            status_id: param.status_id,
            observacoes: normalize::optional(param.observacoes),
        })
    }
}
