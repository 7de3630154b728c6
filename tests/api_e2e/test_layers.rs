//! E2E tests: road network and risk zone layers.

use flood_monitor_lib::models::GeometryKind;

use super::test_helpers::*;

#[actix_rt::test]
#[ignore = "requires PostgreSQL with PostGIS"]
async fn test_road_network_lists_linestrings() {
    let pool = create_test_pool().await;
    let _guard = lock_db().await;
    let app = create_test_app(&pool).await;

    let name = unique_name("via");
    let id = insert_road(&pool, &name, "LINESTRING(-74.12 4.60, -74.11 4.68)").await;

    let (status, body) = get_json(&app, "/red-vial").await;
    assert_eq!(status, 200);

    let segments = body["red_vial"].as_array().expect("red_vial array");
    let total = count(&pool, "SELECT COUNT(*) AS total FROM red_vial", vec![]).await;
    assert_eq!(segments.len() as i64, total);

    let segment = segments.iter().find(|s| s["id"] == id).expect("road listed");
    assert_eq!(segment["nombre"], name.as_str());
    assert!(GeometryKind::LineString.matches(&segment["geom"]));
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL with PostGIS"]
async fn test_risk_zones_list_polygons() {
    let pool = create_test_pool().await;
    let _guard = lock_db().await;
    let app = create_test_app(&pool).await;

    let name = unique_name("zona");
    let id = insert_risk_zone(
        &pool,
        &name,
        "POLYGON((-74.15 4.55, -74.13 4.55, -74.13 4.57, -74.15 4.57, -74.15 4.55))",
    )
    .await;

    let (status, body) = get_json(&app, "/zonas-riesgo").await;
    assert_eq!(status, 200);

    let zones = body["zonas_riesgo"].as_array().expect("zonas_riesgo array");
    let total = count(&pool, "SELECT COUNT(*) AS total FROM zonas_riesgo", vec![]).await;
    assert_eq!(zones.len() as i64, total);

    let zone = zones.iter().find(|z| z["id"] == id).expect("zone listed");
    assert_eq!(zone["categoria"], "alta");
    assert!(GeometryKind::Polygon.matches(&zone["geom"]));
}
