//! Status grupo factory for creating test status group entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test status grupos with customizable fields.
pub struct StatusGrupoFactory<'a> {
    db: &'a DatabaseConnection,
    id: i64,
    nome: String,
}

impl<'a> StatusGrupoFactory<'a> {
    /// Creates a new StatusGrupoFactory with default values.
    ///
    /// Defaults:
    /// - nome: `"Grupo {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id,
            nome: format!("Grupo {}", id),
        }
    }

    pub fn nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = nome.into();
        self
    }

    /// Builds and inserts the status grupo entity into the database.
    pub async fn build(self) -> Result<entity::status_grupo::Model, DbErr> {
        entity::status_grupo::ActiveModel {
            id: ActiveValue::Set(self.id),
            nome: ActiveValue::Set(self.nome),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a status grupo with default values.
pub async fn create_status_grupo(
    db: &DatabaseConnection,
) -> Result<entity::status_grupo::Model, DbErr> {
    StatusGrupoFactory::new(db).build().await
}
