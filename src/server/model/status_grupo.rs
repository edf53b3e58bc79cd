//! Status grupo domain model and parameters.

use crate::model::status_grupo::{SaveStatusGrupoDto, StatusGrupoDto};

/// Grouping of statuses such as "Operacional" or "Manutenção".
#[derive(Debug, Clone, PartialEq)]
pub struct StatusGrupo {
    pub id: i64,
    pub nome: String,
}

impl StatusGrupo {
    pub fn into_dto(self) -> StatusGrupoDto {
        StatusGrupoDto {
            id: self.id,
            nome: self.nome,
        }
    }

    pub fn from_entity(entity: entity::status_grupo::Model) -> Self {
        Self {
            id: entity.id,
            nome: entity.nome,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveStatusGrupoParam {
    pub nome: String,
}

impl SaveStatusGrupoParam {
    pub fn from_dto(dto: SaveStatusGrupoDto) -> Self {
        Self { nome: dto.nome }
    }
}
