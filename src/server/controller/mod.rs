//! HTTP request handlers.
//!
//! Each submodule exposes the list, get, create, update and delete handlers of one
//! resource, annotated with `utoipa::path` so the router can assemble the OpenAPI
//! document from them. Handlers only convert between DTOs and domain parameters and
//! delegate everything else to the service layer.

pub mod health;
pub mod moto;
pub mod param;
pub mod patio;
pub mod status;
pub mod status_grupo;
pub mod usuario;
pub mod zona;

#[cfg(test)]
mod test;
