//! Usuario factory for creating test user entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test usuarios with customizable fields.
///
/// The stored hash is an opaque placeholder; tests that verify passwords should go
/// through the service layer instead.
pub struct UsuarioFactory<'a> {
    db: &'a DatabaseConnection,
    id: i64,
    username: String,
    senha_hash: String,
}

impl<'a> UsuarioFactory<'a> {
    /// Creates a new UsuarioFactory with default values.
    ///
    /// Defaults:
    /// - username: `"usuario{id}"`
    /// - senha_hash: `"hash{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id,
            username: format!("usuario{}", id),
            senha_hash: format!("hash{}", id),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Builds and inserts the usuario entity into the database.
    pub async fn build(self) -> Result<entity::usuario::Model, DbErr> {
        entity::usuario::ActiveModel {
            id: ActiveValue::Set(self.id),
            username: ActiveValue::Set(self.username),
            senha_hash: ActiveValue::Set(self.senha_hash),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a usuario with default values.
///
/// Shorthand for `UsuarioFactory::new(db).build().await`.
pub async fn create_usuario(db: &DatabaseConnection) -> Result<entity::usuario::Model, DbErr> {
    UsuarioFactory::new(db).build().await
}
