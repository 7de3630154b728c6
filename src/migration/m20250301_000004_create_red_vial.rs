//! Migration: Create road network table.

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
                CREATE TABLE red_vial (
                    id SERIAL PRIMARY KEY,
                    nombre VARCHAR,
                    tipo VARCHAR,
                    geom geometry(LINESTRING, 4326)
                );

                CREATE INDEX idx_red_vial_geom ON red_vial USING GIST (geom);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS red_vial;")
            .await?;

        Ok(())
    }
}
