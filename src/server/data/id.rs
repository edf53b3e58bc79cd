//! Primary key allocation for tables without auto-increment.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QuerySelect};

/// Computes the id for a new row as one plus the current maximum of `column`.
///
/// Returns `1` when the table is empty. The value is read at call time without any
/// lock, so two concurrent creates may compute the same id; the primary key
/// constraint then rejects the second insert.
///
/// # Arguments
/// - `db` - Connection or transaction to query
/// - `column` - Primary key column of the target table
///
/// # Returns
/// - `Ok(i64)` - The id to assign to the next row
/// - `Err(DbErr)` - The max query failed
pub async fn next_id<C>(db: &impl ConnectionTrait, column: C) -> Result<i64, DbErr>
where
    C: ColumnTrait,
    C::EntityName: EntityTrait,
{
    let max_id = <C::EntityName as EntityTrait>::find()
        .select_only()
        .column_as(column.max(), "max_id")
        .into_tuple::<Option<i64>>()
        .one(db)
        .await?
        .flatten();

    Ok(max_id.unwrap_or(0) + 1)
}
