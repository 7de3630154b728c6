//! E2E tests: flood report listing and creation.

use actix_web::test;
use flood_monitor_lib::models::GeometryKind;
use serde_json::{Value as JsonValue, json};

use super::test_helpers::*;

#[actix_rt::test]
#[ignore = "requires PostgreSQL with PostGIS"]
async fn test_create_report_copies_station_geometry() {
    let pool = create_test_pool().await;
    let _guard = lock_db().await;
    let app = create_test_app(&pool).await;

    let station_id = insert_station(&pool, &unique_name("estacion-reporte"), -74.12, 4.64).await;

    let req = test::TestRequest::post()
        .uri("/reportes")
        .set_json(json!({
            "estacion_id": station_id,
            "descripcion": "Desbordamiento de quebrada",
            "nivel_agua": 1.75
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: JsonValue = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Reporte creado exitosamente");
    let report_id = body["reporte_id"].as_i64().expect("reporte_id");

    let reports_for_station = count(
        &pool,
        "SELECT COUNT(*) AS total FROM reportes_inundacion WHERE estacion_id = $1",
        vec![station_id.into()],
    )
    .await;
    assert_eq!(reports_for_station, 1);

    let same_geometry = count(
        &pool,
        "SELECT COUNT(*) AS total FROM reportes_inundacion r \
         JOIN estaciones e ON e.id = r.estacion_id \
         WHERE r.id = $1 AND ST_Equals(r.geom, e.geom) AND ST_SRID(r.geom) = 4326",
        vec![(report_id as i32).into()],
    )
    .await;
    assert_eq!(same_geometry, 1, "report geometry must equal the station's");
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL with PostGIS"]
async fn test_create_report_with_query_params() {
    let pool = create_test_pool().await;
    let _guard = lock_db().await;
    let app = create_test_app(&pool).await;

    let station_id = insert_station(&pool, &unique_name("estacion-query"), -74.05, 4.69).await;

    let req = test::TestRequest::post()
        .uri(&format!(
            "/reportes?estacion_id={}&descripcion=Encharcamiento",
            station_id
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let (status, body) = get_json(&app, "/reportes").await;
    assert_eq!(status, 200);
    let report = body["reportes"]
        .as_array()
        .expect("reportes array")
        .iter()
        .find(|r| r["estacion_id"] == station_id)
        .expect("created report listed")
        .clone();
    assert_eq!(report["descripcion"], "Encharcamiento");
    assert!(report["nivel_agua"].is_null());
    assert!(report["fecha"].is_string());
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL with PostGIS"]
async fn test_create_report_for_missing_station_creates_nothing() {
    let pool = create_test_pool().await;
    let _guard = lock_db().await;
    let app = create_test_app(&pool).await;

    let missing = count(
        &pool,
        "SELECT (COALESCE(MAX(id), 0) + 1000)::BIGINT AS total FROM estaciones",
        vec![],
    )
    .await;
    let before = count(&pool, "SELECT COUNT(*) AS total FROM reportes_inundacion", vec![]).await;

    let req = test::TestRequest::post()
        .uri("/reportes")
        .set_json(json!({"estacion_id": missing, "descripcion": "Estación inexistente"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let after = count(&pool, "SELECT COUNT(*) AS total FROM reportes_inundacion", vec![]).await;
    assert_eq!(before, after);
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL with PostGIS"]
async fn test_list_reports_returns_every_row_with_station_name() {
    let pool = create_test_pool().await;
    let _guard = lock_db().await;
    let app = create_test_app(&pool).await;

    let name = unique_name("estacion-listado");
    let station_id = insert_station(&pool, &name, -74.2, 4.6).await;
    let req = test::TestRequest::post()
        .uri("/reportes")
        .set_json(json!({"estacion_id": station_id, "descripcion": "Lluvia intensa"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let (status, body) = get_json(&app, "/reportes").await;
    assert_eq!(status, 200);

    let reports = body["reportes"].as_array().expect("reportes array");
    let total = count(&pool, "SELECT COUNT(*) AS total FROM reportes_inundacion", vec![]).await;
    assert_eq!(reports.len() as i64, total);

    for report in reports {
        assert!(GeometryKind::Point.matches(&report["geom"]));
    }
    let ours = reports
        .iter()
        .find(|r| r["estacion_id"] == station_id)
        .expect("report listed");
    assert_eq!(ours["estacion_nombre"], name.as_str());
}
