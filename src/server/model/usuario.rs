//! Usuario domain model and parameters.

use crate::model::usuario::{CreateUsuarioDto, UpdateUsuarioDto, UsuarioDto};

/// Registered user. The password hash never leaves the server.
#[derive(Debug, Clone, PartialEq)]
pub struct Usuario {
    pub id: i64,
    pub username: String,
    pub senha_hash: String,
}

impl Usuario {
    pub fn into_dto(self) -> UsuarioDto {
        UsuarioDto {
            id: self.id,
            username: self.username,
        }
    }

    pub fn from_entity(entity: entity::usuario::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            senha_hash: entity.senha_hash,
        }
    }
}

/// User-supplied fields of a create or update request.
///
/// `password` is plain text; `None` on update keeps the stored hash.
#[derive(Debug, Clone)]
pub struct SaveUsuarioParam {
    pub username: String,
    pub password: Option<String>,
}

impl SaveUsuarioParam {
    pub fn from_create_dto(dto: CreateUsuarioDto) -> Self {
        Self {
            username: dto.username,
            password: Some(dto.password),
        }
    }

    pub fn from_update_dto(dto: UpdateUsuarioDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
        }
    }
}

