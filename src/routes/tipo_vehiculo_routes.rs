use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::tipo_vehiculo_controller::TipoVehiculoController;
use crate::dto::tipo_vehiculo_dto::{
    CreateTipoVehiculoRequest, TipoVehiculoRequest, TipoVehiculoResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_tipo_vehiculo_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tipos_vehiculo))
        .route("/", post(create_tipo_vehiculo))
        .route("/:id", get(get_tipo_vehiculo))
        .route("/:id", put(update_tipo_vehiculo))
        .route("/:id", delete(delete_tipo_vehiculo))
}

async fn list_tipos_vehiculo(
    State(state): State<AppState>,
) -> Result<Json<Vec<TipoVehiculoResponse>>, AppError> {
    let controller = TipoVehiculoController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_tipo_vehiculo(
    State(state): State<AppState>,
    Json(request): Json<CreateTipoVehiculoRequest>,
) -> Result<Json<TipoVehiculoResponse>, AppError> {
    let controller = TipoVehiculoController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_tipo_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TipoVehiculoResponse>, AppError> {
    let controller = TipoVehiculoController::new(state.pool.clone());
    let response = controller.get(id).await?;
    Ok(Json(response))
}

async fn update_tipo_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<TipoVehiculoRequest>,
) -> Result<Json<TipoVehiculoResponse>, AppError> {
    let controller = TipoVehiculoController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_tipo_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TipoVehiculoResponse>, AppError> {
    let controller = TipoVehiculoController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
