//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories assign explicit ids from a shared counter since
//! no table in the schema auto-increments.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let zona = factory::zona::create_zona(&db).await?;
//!
//!     // Create with all dependencies
//!     let (zona, patio, grupo, status, moto) =
//!         factory::helpers::create_moto_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let moto = factory::moto::MotoFactory::new(&db, zona.id, patio.id, status.id)
//!     .placa("ABC1D23")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod moto;
pub mod patio;
pub mod status;
pub mod status_grupo;
pub mod usuario;
pub mod zona;

pub use moto::create_moto;
pub use patio::create_patio;
pub use status::create_status;
pub use status_grupo::create_status_grupo;
pub use usuario::create_usuario;
pub use zona::create_zona;
