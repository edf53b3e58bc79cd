//! Moto factory for creating test motorcycle entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test motos with customizable fields.
///
/// The referenced zona, patio and status must already exist.
///
/// # Example
///
/// ```rust,ignore
/// let moto = MotoFactory::new(&db, zona.id, patio.id, status.id)
///     .placa("ABC1D23")
///     .chassi("9C2KC1670LR000001")
///     .build()
///     .await?;
/// ```
pub struct MotoFactory<'a> {
    db: &'a DatabaseConnection,
    id: i64,
    placa: String,
    chassi: String,
    qr_code: Option<String>,
    data_entrada: DateTime<Utc>,
    fotos: Option<Vec<String>>,
    zona_id: i64,
    patio_id: i64,
    status_id: i64,
}

impl<'a> MotoFactory<'a> {
    /// Creates a new MotoFactory with default values.
    ///
    /// Defaults:
    /// - placa: `"TST{id:04}"`
    /// - chassi: `"CHASSI{id:011}"`
    /// - data_entrada: now
    pub fn new(db: &'a DatabaseConnection, zona_id: i64, patio_id: i64, status_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            id,
            placa: format!("TST{:04}", id),
            chassi: format!("CHASSI{:011}", id),
            qr_code: None,
            data_entrada: Utc::now(),
            fotos: None,
            zona_id,
            patio_id,
            status_id,
        }
    }

    pub fn placa(mut self, placa: impl Into<String>) -> Self {
        self.placa = placa.into();
        self
    }

    pub fn chassi(mut self, chassi: impl Into<String>) -> Self {
        self.chassi = chassi.into();
        self
    }

    pub fn qr_code(mut self, qr_code: impl Into<String>) -> Self {
        self.qr_code = Some(qr_code.into());
        self
    }

    pub fn fotos(mut self, fotos: Vec<String>) -> Self {
        self.fotos = Some(fotos);
        self
    }

    /// Builds and inserts the moto entity into the database.
    pub async fn build(self) -> Result<entity::moto::Model, DbErr> {
        let fotos = self
            .fotos
            .map(|f| serde_json::to_string(&f))
            .transpose()
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::moto::ActiveModel {
            id: ActiveValue::Set(self.id),
            placa: ActiveValue::Set(self.placa),
            chassi: ActiveValue::Set(self.chassi),
            qr_code: ActiveValue::Set(self.qr_code),
            data_entrada: ActiveValue::Set(self.data_entrada),
            previsao_entrega: ActiveValue::Set(None),
            fotos: ActiveValue::Set(fotos),
            zona_id: ActiveValue::Set(self.zona_id),
            patio_id: ActiveValue::Set(self.patio_id),
            status_id: ActiveValue::Set(self.status_id),
            observacoes: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a moto with default values referencing the given rows.
pub async fn create_moto(
    db: &DatabaseConnection,
    zona_id: i64,
    patio_id: i64,
    status_id: i64,
) -> Result<entity::moto::Model, DbErr> {
    MotoFactory::new(db, zona_id, patio_id, status_id)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::helpers::create_moto_with_dependencies};
    use entity::prelude::*;
    use sea_orm::{EntityTrait, PaginatorTrait};

    #[tokio::test]
    async fn creates_moto_with_dependencies() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_yard_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (zona, patio, _grupo, status, moto) = create_moto_with_dependencies(db).await?;

        assert_eq!(moto.zona_id, zona.id);
        assert_eq!(moto.patio_id, patio.id);
        assert_eq!(moto.status_id, status.id);
        assert_eq!(Moto::find().count(db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn stores_fotos_as_json_array() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_yard_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (zona, patio, _grupo, status, _) = create_moto_with_dependencies(db).await?;
        let moto = MotoFactory::new(db, zona.id, patio.id, status.id)
            .fotos(vec!["a.jpg".to_string(), "b.jpg".to_string()])
            .build()
            .await?;

        assert_eq!(moto.fotos.as_deref(), Some(r#"["a.jpg","b.jpg"]"#));

        Ok(())
    }
}
