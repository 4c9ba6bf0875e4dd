//! Tests de contrato de la API
//!
//! El crate es un binario, así que estos tests verifican el contrato
//! HTTP/JSON documentado contra una app de test con respuestas canónicas.
//! Los tests del router real viven en src/routes (cfg(test)).

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Json;
use serde_json::json;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// App de test con los shapes canónicos de respuesta del servicio
fn create_test_app() -> axum::Router {
    axum::Router::new()
        .route(
            "/tipos_vehiculo",
            post(|Json(body): Json<serde_json::Value>| async move {
                // El create devuelve la entidad con el id asignado por la base
                Json(json!({
                    "id": 1,
                    "tipo_vehiculo": body["tipo_vehiculo"]
                }))
            }),
        )
        .route(
            "/vehiculos",
            post(|Json(body): Json<serde_json::Value>| async move {
                // El tipo entra como id numérico y sale como etiqueta
                assert!(body["tipo_vehiculo"].is_i64());
                Json(json!({
                    "placa": body["placa"],
                    "marca": body["marca"],
                    "vin": body["vin"],
                    "linea": body["linea"],
                    "cilindrada": body["cilindrada"],
                    "color": body["color"],
                    "chasis": body["chasis"],
                    "tipo_vehiculo": "Sedan",
                    "modelo": body["modelo"],
                    "propietario_identificacion": body["propietario_identificacion"]
                }))
            }),
        )
        .route(
            "/vehiculos/:placa",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({
                        "error": "Not Found",
                        "message": "Vehiculo no encontrado",
                        "code": "NOT_FOUND"
                    })),
                )
                    .into_response()
            }),
        )
        .route(
            "/datos_propietarios_vehiculos",
            get(|| async {
                Json(json!([
                    {
                        "identificacion": 123,
                        "nombre": "Ana",
                        "apellido": "Ruiz",
                        "placa": "ABC123",
                        "marca": "Renault",
                        "color": "Rojo"
                    },
                    {
                        "identificacion": 456,
                        "nombre": "Luis",
                        "apellido": "Gómez",
                        "placa": null,
                        "marca": null,
                        "color": null
                    }
                ]))
            }),
        )
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_crear_tipo_devuelve_id_generado() {
    let app = create_test_app();
    let response = app
        .oneshot(json_request(
            "POST",
            "/tipos_vehiculo",
            json!({"tipo_vehiculo": "Sedan"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["tipo_vehiculo"], "Sedan");
}

#[tokio::test]
async fn test_crear_vehiculo_rinde_tipo_como_etiqueta() {
    let app = create_test_app();
    let response = app
        .oneshot(json_request(
            "POST",
            "/vehiculos",
            json!({
                "placa": "ABC123",
                "marca": "Renault",
                "vin": "9FB4SRAH4JM123456",
                "linea": "Logan",
                "cilindrada": "1600",
                "color": "Rojo",
                "chasis": "CH-991204",
                "tipo_vehiculo": 1,
                "modelo": "2019",
                "propietario_identificacion": 123
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["tipo_vehiculo"], "Sedan");
    assert_eq!(body["placa"], "ABC123");
}

#[tokio::test]
async fn test_vehiculo_inexistente_devuelve_envelope_404() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/vehiculos/ZZZ999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Vehiculo no encontrado");
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_reporte_incluye_propietarios_sin_vehiculo() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/datos_propietarios_vehiculos")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let filas = body.as_array().unwrap();
    assert_eq!(filas.len(), 2);
    assert_eq!(filas[0]["placa"], "ABC123");
    assert!(filas[1]["placa"].is_null());
    assert!(filas[1]["marca"].is_null());
}
