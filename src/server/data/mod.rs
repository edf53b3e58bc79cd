//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! entity in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! No table auto-increments; every `create` allocates its id through [`id::next_id`].

pub mod id;
pub mod moto;
pub mod patio;
pub mod status;
pub mod status_grupo;
pub mod usuario;
pub mod zona;

#[cfg(test)]
mod test;
