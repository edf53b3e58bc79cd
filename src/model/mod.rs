//! API data transfer objects.
//!
//! Request and response shapes serialized as JSON by the controllers. Field names are
//! camelCase on the wire; request bodies also accept the PascalCase spelling. Every DTO
//! derives `ToSchema` so it shows up in the generated OpenAPI document.

pub mod api;
pub mod moto;
pub mod patio;
pub mod status;
pub mod status_grupo;
pub mod usuario;
pub mod zona;
