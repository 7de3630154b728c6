//! Flood report entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reportes_inundacion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "estacion_id")]
    pub station_id: i32,
    #[sea_orm(column_name = "fecha")]
    pub reported_at: DateTimeUtc,
    #[sea_orm(column_name = "descripcion")]
    pub description: Option<String>,
    /// Water level in metres
    #[sea_orm(column_name = "nivel_agua")]
    pub water_level: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::station::Entity",
        from = "Column::StationId",
        to = "super::station::Column::Id"
    )]
    Station,
}

impl Related<super::station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Station.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
