//! SeaORM entity models for the yard fleet schema.
//!
//! Identifiers are assigned by the application (`max(id) + 1`), so no primary key
//! in this crate is auto-incremented.

pub mod prelude;

pub mod moto;
pub mod patio;
pub mod status;
pub mod status_grupo;
pub mod usuario;
pub mod zona;
