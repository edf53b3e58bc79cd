//! Zona factory for creating test zone entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test zonas with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let zona = ZonaFactory::new(&db).nome("Norte").letra("N").build().await?;
/// ```
pub struct ZonaFactory<'a> {
    db: &'a DatabaseConnection,
    id: i64,
    nome: String,
    letra: String,
}

impl<'a> ZonaFactory<'a> {
    /// Creates a new ZonaFactory with default values.
    ///
    /// Defaults:
    /// - nome: `"Zona {id}"`
    /// - letra: a letter from `A` to `Z` derived from the id
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let letra = char::from(b'A' + (id % 26) as u8).to_string();
        Self {
            db,
            id,
            nome: format!("Zona {}", id),
            letra,
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

    pub fn letra(mut self, letra: impl Into<String>) -> Self {
        self.letra = letra.into();
        self
    }

    /// Builds and inserts the zona entity into the database.
    pub async fn build(self) -> Result<entity::zona::Model, DbErr> {
        entity::zona::ActiveModel {
            id: ActiveValue::Set(self.id),
            nome: ActiveValue::Set(self.nome),
            letra: ActiveValue::Set(self.letra),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a zona with default values.
pub async fn create_zona(db: &DatabaseConnection) -> Result<entity::zona::Model, DbErr> {
    ZonaFactory::new(db).build().await
}
