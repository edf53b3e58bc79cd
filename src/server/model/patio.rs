//! Patio domain model and parameters.

use crate::model::patio::{PatioDto, SavePatioDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Patio {
    pub id: i64,
    pub nome: String,
}

impl Patio {
    pub fn into_dto(self) -> PatioDto {
        PatioDto {
            id: self.id,
            nome: self.nome,
        }
    }

    pub fn from_entity(entity: entity::patio::Model) -> Self {
        Self {
            id: entity.id,
            nome: entity.nome,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavePatioParam {
    pub nome: String,
}

impl SavePatioParam {
    pub fn from_dto(dto: SavePatioDto) -> Self {
        Self { nome: dto.nome }
    }
}
