//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. `Save*Param` types carry the
//! user-supplied fields of create and update operations; the service layer normalizes
//! them before they reach a repository.

pub mod moto;
pub mod page;
pub mod patio;
pub mod status;
pub mod status_grupo;
pub mod usuario;
pub mod zona;
