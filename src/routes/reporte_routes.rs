use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::reporte_controller::ReporteController;
use crate::dto::reporte_dto::PropietarioVehiculoResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_reporte_router() -> Router<AppState> {
    Router::new().route(
        "/datos_propietarios_vehiculos",
        get(datos_propietarios_vehiculos),
    )
}

async fn datos_propietarios_vehiculos(
    State(state): State<AppState>,
) -> Result<Json<Vec<PropietarioVehiculoResponse>>, AppError> {
    let controller = ReporteController::new(state.pool.clone());
    let response = controller.datos_propietarios_vehiculos().await?;
    Ok(Json(response))
}
