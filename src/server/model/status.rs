//! Status domain model and parameters.

use crate::{
    model::status::{SaveStatusDto, StatusDto},
    server::model::status_grupo::StatusGrupo,
};

/// Operational state of a moto, always loaded together with its group.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub id: i64,
    pub nome: String,
    pub status_grupo: StatusGrupo,
}

impl Status {
    pub fn into_dto(self) -> StatusDto {
        StatusDto {
            id: self.id,
            nome: self.nome,
            status_grupo_id: self.status_grupo.id,
            status_grupo: Some(self.status_grupo.into_dto()),
        }
    }

    /// Builds the domain model from a status row and the row of its group.
    pub fn from_entities(
        status: entity::status::Model,
        status_grupo: entity::status_grupo::Model,
    ) -> Self {
        Self {
            id: status.id,
            nome: status.nome,
            status_grupo: StatusGrupo::from_entity(status_grupo),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveStatusParam {
    pub nome: String,
    pub status_grupo_id: i64,
}

impl SaveStatusParam {
    pub fn from_dto(dto: SaveStatusDto) -> Self {
        Self {
            nome: dto.nome,
            status_grupo_id: dto.status_grupo_id,
        }
    }
}
