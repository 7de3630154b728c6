//! Migration: Create flood risk zones table.

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
                CREATE TABLE zonas_riesgo (
                    id SERIAL PRIMARY KEY,
                    nombre VARCHAR,
                    categoria VARCHAR,
                    geom geometry(POLYGON, 4326)
                );

                CREATE INDEX idx_zonas_riesgo_geom ON zonas_riesgo USING GIST (geom);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS zonas_riesgo;")
            .await?;

        Ok(())
    }
}
