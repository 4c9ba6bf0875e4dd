use sqlx::PgPool;
use validator::Validate;

use crate::dto::vehiculo_dto::{VehiculoRequest, VehiculoResponse};
use crate::repositories::propietario_repository::PropietarioRepository;
use crate::repositories::tipo_vehiculo_repository::TipoVehiculoRepository;
use crate::repositories::vehiculo_repository::VehiculoRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct VehiculoController {
    vehiculos: VehiculoRepository,
    propietarios: PropietarioRepository,
    tipos: TipoVehiculoRepository,
}

impl VehiculoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehiculos: VehiculoRepository::new(pool.clone()),
            propietarios: PropietarioRepository::new(pool.clone()),
            tipos: TipoVehiculoRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<VehiculoResponse>> {
        let vehiculos = self.vehiculos.find_all_con_tipo().await?;
        Ok(vehiculos.into_iter().map(VehiculoResponse::from).collect())
    }

    pub async fn get(&self, placa: &str) -> AppResult<VehiculoResponse> {
        let vehiculo = self
            .vehiculos
            .find_by_placa_con_tipo(placa)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehiculo no encontrado".to_string()))?;
        Ok(VehiculoResponse::from(vehiculo))
    }

    /// Solo se verifica el tipo de vehículo; un propietario inexistente
    /// rompe la foreign key y sube como error de base de datos
    pub async fn create(&self, request: VehiculoRequest) -> AppResult<VehiculoResponse> {
        request.validate()?;

        let tipo = self
            .tipos
            .find_by_id(request.tipo_vehiculo)
            .await?
            .ok_or_else(|| AppError::BadRequest("Tipo de vehiculo no encontrado".to_string()))?;

        let vehiculo = self.vehiculos.create(&request.into_model()).await?;

        Ok(VehiculoResponse {
            placa: vehiculo.placa,
            marca: vehiculo.marca,
            vin: vehiculo.vin,
            linea: vehiculo.linea,
            cilindrada: vehiculo.cilindrada,
            color: vehiculo.color,
            chasis: vehiculo.chasis,
            tipo_vehiculo: tipo.tipo_vehiculo,
            modelo: vehiculo.modelo,
            propietario_identificacion: vehiculo.propietario_identificacion,
        })
    }

    /// Reemplazo completo: exige que el vehículo exista (404) y que el
    /// propietario y el tipo destino existan (400 cada uno)
    pub async fn update(&self, placa: &str, request: VehiculoRequest) -> AppResult<VehiculoResponse> {
        request.validate()?;

        if !self.vehiculos.exists(placa).await? {
            return Err(AppError::NotFound("Vehiculo no encontrado".to_string()));
        }

        if !self
            .propietarios
            .exists(request.propietario_identificacion)
            .await?
        {
            return Err(AppError::BadRequest("Propietario no encontrado".to_string()));
        }

        let tipo = self
            .tipos
            .find_by_id(request.tipo_vehiculo)
            .await?
            .ok_or_else(|| AppError::BadRequest("Tipo de vehiculo no encontrado".to_string()))?;

        let vehiculo = self.vehiculos.update(placa, &request.into_model()).await?;

        Ok(VehiculoResponse {
            placa: vehiculo.placa,
            marca: vehiculo.marca,
            vin: vehiculo.vin,
            linea: vehiculo.linea,
            cilindrada: vehiculo.cilindrada,
            color: vehiculo.color,
            chasis: vehiculo.chasis,
            tipo_vehiculo: tipo.tipo_vehiculo,
            modelo: vehiculo.modelo,
            propietario_identificacion: vehiculo.propietario_identificacion,
        })
    }

    /// Devuelve los datos del vehículo eliminado, con la etiqueta del tipo
    pub async fn delete(&self, placa: &str) -> AppResult<VehiculoResponse> {
        let vehiculo = self
            .vehiculos
            .find_by_placa_con_tipo(placa)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehiculo no encontrado".to_string()))?;
        self.vehiculos.delete(placa).await?;
        Ok(VehiculoResponse::from(vehiculo))
    }
}
