use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::propietario_controller::PropietarioController;
use crate::dto::propietario_dto::{PropietarioRequest, PropietarioResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_propietario_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_propietarios))
        .route("/", post(create_propietario))
        .route("/:identificacion", get(get_propietario))
        .route("/:identificacion", put(update_propietario))
        .route("/:identificacion", delete(delete_propietario))
}

async fn list_propietarios(
    State(state): State<AppState>,
) -> Result<Json<Vec<PropietarioResponse>>, AppError> {
    let controller = PropietarioController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_propietario(
    State(state): State<AppState>,
    Json(request): Json<PropietarioRequest>,
) -> Result<Json<PropietarioResponse>, AppError> {
    let controller = PropietarioController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_propietario(
    State(state): State<AppState>,
    Path(identificacion): Path<i64>,
) -> Result<Json<PropietarioResponse>, AppError> {
    let controller = PropietarioController::new(state.pool.clone());
    let response = controller.get(identificacion).await?;
    Ok(Json(response))
}

async fn update_propietario(
    State(state): State<AppState>,
    Path(identificacion): Path<i64>,
    Json(request): Json<PropietarioRequest>,
) -> Result<Json<PropietarioResponse>, AppError> {
    let controller = PropietarioController::new(state.pool.clone());
    let response = controller.update(identificacion, request).await?;
    Ok(Json(response))
}

async fn delete_propietario(
    State(state): State<AppState>,
    Path(identificacion): Path<i64>,
) -> Result<Json<PropietarioResponse>, AppError> {
    let controller = PropietarioController::new(state.pool.clone());
    let response = controller.delete(identificacion).await?;
    Ok(Json(response))
}
