//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Required fields, foreign key existence and uniqueness, checked in
//!   that order so the first failure is the one reported
//! - **Normalization**: Trimming text and uppercasing placas, chassis and zone letters
//! - **Referential Guards**: Refusing deletes while other rows still reference the target
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod moto;
pub mod patio;
pub mod status;
pub mod status_grupo;
pub mod usuario;
pub mod zona;

#[cfg(test)]
mod test;
