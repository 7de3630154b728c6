//! E2E tests: station endpoints.

use flood_monitor_lib::models::GeometryKind;

use super::test_helpers::*;

#[actix_rt::test]
#[ignore = "requires PostgreSQL with PostGIS"]
async fn test_list_stations_returns_every_row() {
    let pool = create_test_pool().await;
    let _guard = lock_db().await;
    let app = create_test_app(&pool).await;

    let name = unique_name("estacion-lista");
    let id = insert_station(&pool, &name, -74.081, 4.609).await;

    let (status, body) = get_json(&app, "/estaciones").await;
    assert_eq!(status, 200);

    let stations = body["estaciones"].as_array().expect("estaciones array");
    let total = count(&pool, "SELECT COUNT(*) AS total FROM estaciones", vec![]).await;
    assert_eq!(stations.len() as i64, total);

    let station = stations
        .iter()
        .find(|s| s["id"] == id)
        .expect("inserted station listed");
    assert_eq!(station["nombre"], name.as_str());
    assert_eq!(station["tipo"], "pluviométrica");
    assert!(GeometryKind::Point.matches(&station["geom"]));
    assert_eq!(station["geom"]["coordinates"][0], -74.081);
    assert_eq!(station["geom"]["coordinates"][1], 4.609);
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL with PostGIS"]
async fn test_get_station_by_id() {
    let pool = create_test_pool().await;
    let _guard = lock_db().await;
    let app = create_test_app(&pool).await;

    let name = unique_name("estacion-detalle");
    let id = insert_station(&pool, &name, -74.1, 4.7).await;

    let (status, body) = get_json(&app, &format!("/estaciones/{}", id)).await;

    assert_eq!(status, 200);
    assert_eq!(body["id"], id);
    assert_eq!(body["nombre"], name.as_str());
    assert!(GeometryKind::Point.matches(&body["geom"]));
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL with PostGIS"]
async fn test_get_missing_station_returns_404() {
    let pool = create_test_pool().await;
    let _guard = lock_db().await;
    let app = create_test_app(&pool).await;

    let missing = count(
        &pool,
        "SELECT (COALESCE(MAX(id), 0) + 1000)::BIGINT AS total FROM estaciones",
        vec![],
    )
    .await;

    let (status, body) = get_json(&app, &format!("/estaciones/{}", missing)).await;

    assert_eq!(status, 404);
    assert_eq!(body["error"], "NOT_FOUND");
}
