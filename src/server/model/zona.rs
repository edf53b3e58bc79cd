//! Zona domain model and parameters.

use crate::model::zona::{SaveZonaDto, ZonaDto};

/// Zone of a yard identified by a single uppercase letter.
#[derive(Debug, Clone, PartialEq)]
pub struct Zona {
    pub id: i64,
    pub nome: String,
    pub letra: String,
}

impl Zona {
    pub fn into_dto(self) -> ZonaDto {
        ZonaDto {
            id: self.id,
            nome: self.nome,
            letra: self.letra,
        }
    }

    pub fn from_entity(entity: entity::zona::Model) -> Self {
        Self {
            id: entity.id,
            nome: entity.nome,
            letra: entity.letra,
        }
    }
}

/// Fields of a zona create or update request.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveZonaParam {
    pub nome: String,
    pub letra: String,
}

impl SaveZonaParam {
    pub fn from_dto(dto: SaveZonaDto) -> Self {
        Self {
            nome: dto.nome,
            letra: dto.letra,
        }
    }
}
