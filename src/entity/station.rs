//! Monitoring station entity for SeaORM.
//!
//! The `geom` POINT column is not mapped; geometry is read through
//! `ST_AsGeoJSON` in the query layer.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "estaciones")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "nombre")]
    pub name: String,
    /// Station type, e.g. rain gauge or river level sensor
    #[sea_orm(column_name = "tipo")]
    pub kind: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flood_report::Entity")]
    FloodReports,
}

impl Related<super::flood_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FloodReports.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
