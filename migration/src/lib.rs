pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_usuario_table;
mod m20261019_000002_create_zona_table;
mod m20261019_000003_create_patio_table;
mod m20261019_000004_create_status_grupo_table;
mod m20261019_000005_create_status_table;
mod m20261019_000006_create_moto_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_usuario_table::Migration),
            Box::new(m20261019_000002_create_zona_table::Migration),
            Box::new(m20261019_000003_create_patio_table::Migration),
            Box::new(m20261019_000004_create_status_grupo_table::Migration),
            Box::new(m20261019_000005_create_status_table::Migration),
            Box::new(m20261019_000006_create_moto_table::Migration),
        ]
    }
}
