use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::vehiculo_controller::VehiculoController;
use crate::dto::vehiculo_dto::{VehiculoRequest, VehiculoResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehiculo_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehiculos))
        .route("/", post(create_vehiculo))
        .route("/:placa", get(get_vehiculo))
        .route("/:placa", put(update_vehiculo))
        .route("/:placa", delete(delete_vehiculo))
}

async fn list_vehiculos(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehiculoResponse>>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_vehiculo(
    State(state): State<AppState>,
    Json(request): Json<VehiculoRequest>,
) -> Result<Json<VehiculoResponse>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_vehiculo(
    State(state): State<AppState>,
    Path(placa): Path<String>,
) -> Result<Json<VehiculoResponse>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.get(&placa).await?;
    Ok(Json(response))
}

async fn update_vehiculo(
    State(state): State<AppState>,
    Path(placa): Path<String>,
    Json(request): Json<VehiculoRequest>,
) -> Result<Json<VehiculoResponse>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.update(&placa, request).await?;
    Ok(Json(response))
}

async fn delete_vehiculo(
    State(state): State<AppState>,
    Path(placa): Path<String>,
) -> Result<Json<VehiculoResponse>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.delete(&placa).await?;
    Ok(Json(response))
}
