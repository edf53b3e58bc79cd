//! Status factory for creating test status entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test statuses with customizable fields.
///
/// The owning status grupo must already exist.
pub struct StatusFactory<'a> {
    db: &'a DatabaseConnection,
    id: i64,
    nome: String,
    status_grupo_id: i64,
}

impl<'a> StatusFactory<'a> {
    /// Creates a new StatusFactory with default values.
    ///
    /// Defaults:
    /// - nome: `"Status {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `status_grupo_id` - ID of the owning status grupo
    pub fn new(db: &'a DatabaseConnection, status_grupo_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            id,
            nome: format!("Status {}", id),
            status_grupo_id,
        }
    }

    pub fn nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = nome.into();
        self
    }

    /// Builds and inserts the status entity into the database.
    pub async fn build(self) -> Result<entity::status::Model, DbErr> {
        entity::status::ActiveModel {
            id: ActiveValue::Set(self.id),
            nome: ActiveValue::Set(self.nome),
            status_grupo_id: ActiveValue::Set(self.status_grupo_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a status with default values in the given status grupo.
pub async fn create_status(
    db: &DatabaseConnection,
    status_grupo_id: i64,
) -> Result<entity::status::Model, DbErr> {
    StatusFactory::new(db, status_grupo_id).build().await
}
