//! Shared helper utilities for factory methods.
//!
//! Provides id generation and convenience methods for creating entities together
//! with the rows they reference.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique ids and names in tests.
static COUNTER: std::sync::atomic::AtomicI64 = std::sync::atomic::AtomicI64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `i64` - Next unique counter value
pub fn next_id() -> i64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a moto together with the zona, patio, status grupo and status it references.
///
/// All entities are created with default values. Use the individual factories when
/// specific values matter to the test.
///
/// # Returns
/// - `Ok((zona, patio, status_grupo, status, moto))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_moto_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::zona::Model,
        entity::patio::Model,
        entity::status_grupo::Model,
        entity::status::Model,
        entity::moto::Model,
    ),
    DbErr,
> {
    let zona = crate::factory::zona::create_zona(db).await?;
    let patio = crate::factory::patio::create_patio(db).await?;
    let grupo = crate::factory::status_grupo::create_status_grupo(db).await?;
    let status = crate::factory::status::create_status(db, grupo.id).await?;
    let moto = crate::factory::moto::create_moto(db, zona.id, patio.id, status.id).await?;

    Ok((zona, patio, grupo, status, moto))
}
