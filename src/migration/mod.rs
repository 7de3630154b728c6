//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_enable_postgis;
mod m20250301_000002_create_estaciones;
mod m20250301_000003_create_reportes_inundacion;
mod m20250301_000004_create_red_vial;
mod m20250301_000005_create_zonas_riesgo;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_enable_postgis::Migration),
            Box::new(m20250301_000002_create_estaciones::Migration),
            Box::new(m20250301_000003_create_reportes_inundacion::Migration),
            Box::new(m20250301_000004_create_red_vial::Migration),
            Box::new(m20250301_000005_create_zonas_riesgo::Migration),
        ]
    }
}
