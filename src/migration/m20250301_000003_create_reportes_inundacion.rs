//! Migration: Create flood reports table.
//!
//! Each report belongs to a station and stores a copy of the station's
//! point at the time the report was filed.

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
                CREATE TABLE reportes_inundacion (
                    id SERIAL PRIMARY KEY,
                    estacion_id INTEGER NOT NULL REFERENCES estaciones(id),
                    fecha TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    descripcion VARCHAR,
                    nivel_agua DOUBLE PRECISION,
                    geom geometry(POINT, 4326)
                );

                CREATE INDEX idx_reportes_inundacion_estacion_id ON reportes_inundacion(estacion_id);

                -- Latest report lookup for statistics
                CREATE INDEX idx_reportes_inundacion_fecha ON reportes_inundacion(fecha DESC);

                CREATE INDEX idx_reportes_inundacion_geom ON reportes_inundacion USING GIST (geom);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS reportes_inundacion CASCADE;")
            .await?;

        Ok(())
    }
}
