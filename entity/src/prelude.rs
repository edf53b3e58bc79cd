pub use super::moto::Entity as Moto;
pub use super::patio::Entity as Patio;
pub use super::status::Entity as Status;
pub use super::status_grupo::Entity as StatusGrupo;
pub use super::usuario::Entity as Usuario;
pub use super::zona::Entity as Zona;
