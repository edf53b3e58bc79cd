//! Patio factory for creating test yard entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test patios with customizable fields.
pub struct PatioFactory<'a> {
    db: &'a DatabaseConnection,
    id: i64,
    nome: String,
}

impl<'a> PatioFactory<'a> {
    /// Creates a new PatioFactory with default values.
    ///
    /// Defaults:
    /// - nome: `"Pátio {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id,
            nome: format!("Pátio {}", id),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = nome.into();
        self
    }

    /// Builds and inserts the patio entity into the database.
    pub async fn build(self) -> Result<entity::patio::Model, DbErr> {
        entity::patio::ActiveModel {
            id: ActiveValue::Set(self.id),
            nome: ActiveValue::Set(self.nome),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a patio with default values.
pub async fn create_patio(db: &DatabaseConnection) -> Result<entity::patio::Model, DbErr> {
    PatioFactory::new(db).build().await
}
