//! Moto domain model and parameters.
//!
//! A moto is always returned with its zona, patio and status (including the status
//! grupo) expanded. The repository loads the related rows as `MotoEntities`, which the
//! service converts with `Moto::from_entities` since decoding the stored photo list can
//! fail.

use chrono::{DateTime, Utc};

use crate::{
    model::moto::{MotoDto, SaveMotoDto},
    server::{
        error::internal::InternalError,
        model::{patio::Patio, status::Status, zona::Zona},
    },
};

/// A moto row together with every row it references.
#[derive(Debug, Clone, PartialEq)]
pub struct MotoEntities {
    pub moto: entity::moto::Model,
    pub zona: entity::zona::Model,
    pub patio: entity::patio::Model,
    pub status: entity::status::Model,
    pub status_grupo: entity::status_grupo::Model,
}

/// Tracked motorcycle with its relations expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct Moto {
    pub id: i64,
    pub placa: String,
    pub chassi: String,
    pub qr_code: Option<String>,
    pub data_entrada: DateTime<Utc>,
    pub previsao_entrega: Option<DateTime<Utc>>,
    pub fotos: Option<Vec<String>>,
    pub observacoes: Option<String>,
    pub zona: Zona,
    pub patio: Patio,
    pub status: Status,
}

impl Moto {
    pub fn into_dto(self) -> MotoDto {
        MotoDto {
            id: self.id,
            placa: self.placa,
            chassi: self.chassi,
            qr_code: self.qr_code,
            data_entrada: self.data_entrada,
            previsao_entrega: self.previsao_entrega,
            fotos: self.fotos,
            zona_id: self.zona.id,
            patio_id: self.patio.id,
            status_id: self.status.id,
            observacoes: self.observacoes,
            zona: Some(self.zona.into_dto()),
            patio: Some(self.patio.into_dto()),
            status: Some(self.status.into_dto()),
        }
    }

    /// Converts the loaded rows into the domain model.
    ///
    /// # Returns
    /// - `Ok(Moto)` - The converted moto
    /// - `Err(InternalError::InvalidFotos)` - The stored photo list is not a JSON array
    ///   of strings
    pub fn from_entities(entities: MotoEntities) -> Result<Self, InternalError> {
        let MotoEntities {
            moto,
            zona,
            patio,
            status,
            status_grupo,
        } = entities;

        let fotos = moto
            .fotos
            .as_deref()
            .map(serde_json::from_str::<Vec<String>>)
            .transpose()
            .map_err(|source| InternalError::InvalidFotos {
                moto_id: moto.id,
                source,
            })?;

        Ok(Self {
            id: moto.id,
            placa: moto.placa,
            chassi: moto.chassi,
            qr_code: moto.qr_code,
            data_entrada: moto.data_entrada,
            previsao_entrega: moto.previsao_entrega,
            fotos,
            observacoes: moto.observacoes,
            zona: Zona::from_entity(zona),
            patio: Patio::from_entity(patio),
            status: Status::from_entities(status, status_grupo),
        })
    }
}

/// Fields of a moto create or update request.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveMotoParam {
    pub placa: String,
    pub chassi: String,
    pub qr_code: Option<String>,
    /// `None` means "now" on create and "keep" on update.
    pub data_entrada: Option<DateTime<Utc>>,
    pub previsao_entrega: Option<DateTime<Utc>>,
    pub fotos: Option<Vec<String>>,
    pub zona_id: i64,
    pub patio_id: i64,
    pub status_id: i64,
    pub observacoes: Option<String>,
}

impl SaveMotoParam {
    pub fn from_dto(dto: SaveMotoDto) -> Self {
        Self {
            placa: dto.placa,
            chassi: dto.chassi,
            qr_code: dto.qr_code,
            data_entrada: dto.data_entrada,
            previsao_entrega: dto.previsao_entrega,
            fotos: dto.fotos,
            zona_id: dto.zona_id,
            patio_id: dto.patio_id,
            status_id: dto.status_id,
            observacoes: dto.observacoes,
        }
    }
}
