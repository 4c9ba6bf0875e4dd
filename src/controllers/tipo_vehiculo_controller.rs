use sqlx::PgPool;
use validator::Validate;

use crate::dto::tipo_vehiculo_dto::{
    CreateTipoVehiculoRequest, TipoVehiculoRequest, TipoVehiculoResponse,
};
use crate::models::tipo_vehiculo::TipoVehiculo;
use crate::repositories::tipo_vehiculo_repository::TipoVehiculoRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct TipoVehiculoController {
    repository: TipoVehiculoRepository,
}

impl TipoVehiculoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TipoVehiculoRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<TipoVehiculoResponse>> {
        let tipos = self.repository.find_all().await?;
        Ok(tipos.into_iter().map(TipoVehiculoResponse::from).collect())
    }

    pub async fn create(&self, request: CreateTipoVehiculoRequest) -> AppResult<TipoVehiculoResponse> {
        request.validate()?;
        let tipo = self.repository.create(&request.tipo_vehiculo).await?;
        Ok(TipoVehiculoResponse::from(tipo))
    }

    pub async fn get(&self, id: i64) -> AppResult<TipoVehiculoResponse> {
        let tipo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tipo de vehiculo no encontrado".to_string()))?;
        Ok(TipoVehiculoResponse::from(tipo))
    }

    pub async fn update(&self, id: i64, request: TipoVehiculoRequest) -> AppResult<TipoVehiculoResponse> {
        request.validate()?;
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(
                "Tipo de vehiculo no encontrado".to_string(),
            ));
        }
        let tipo = self
            .repository
            .update(
                id,
                &TipoVehiculo {
                    id: request.id,
                    tipo_vehiculo: request.tipo_vehiculo,
                },
            )
            .await?;
        Ok(TipoVehiculoResponse::from(tipo))
    }

    /// El borrado se bloquea mientras haya vehículos que referencien el tipo;
    /// permitirlo dejaría filas con una foreign key colgante
    pub async fn delete(&self, id: i64) -> AppResult<TipoVehiculoResponse> {
        let tipo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tipo de vehiculo no encontrado".to_string()))?;

        let referencias = self.repository.count_vehiculos(id).await?;
        if referencias > 0 {
            return Err(AppError::Conflict(
                "El tipo de vehiculo tiene vehiculos asociados".to_string(),
            ));
        }

        self.repository.delete(id).await?;
        Ok(TipoVehiculoResponse::from(tipo))
    }
}
