//! Migration: Create monitoring stations table.
//!
//! Stations are point features; flood reports copy their geometry.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE estaciones (
                    id SERIAL PRIMARY KEY,
                    nombre VARCHAR NOT NULL,
                    tipo VARCHAR,
                    geom geometry(POINT, 4326)
                );

                CREATE INDEX idx_estaciones_geom ON estaciones USING GIST (geom);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS estaciones CASCADE;")
            .await?;

        Ok(())
    }
}
