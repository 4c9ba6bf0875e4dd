use sqlx::PgPool;
use validator::Validate;

use crate::dto::propietario_dto::{PropietarioRequest, PropietarioResponse};
use crate::repositories::propietario_repository::PropietarioRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct PropietarioController {
    repository: PropietarioRepository,
}

impl PropietarioController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PropietarioRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<PropietarioResponse>> {
        let propietarios = self.repository.find_all().await?;
        Ok(propietarios
            .into_iter()
            .map(PropietarioResponse::from)
            .collect())
    }

    /// Inserta sin chequeo de unicidad propio: una identificación repetida
    /// rompe la primary key y sube como error de base de datos
    pub async fn create(&self, request: PropietarioRequest) -> AppResult<PropietarioResponse> {
        request.validate()?;
        let propietario = self.repository.create(&request.into_model()).await?;
        Ok(PropietarioResponse::from(propietario))
    }

    pub async fn get(&self, identificacion: i64) -> AppResult<PropietarioResponse> {
        let propietario = self
            .repository
            .find_by_identificacion(identificacion)
            .await?
            .ok_or_else(|| AppError::NotFound("Propietario no encontrado".to_string()))?;
        Ok(PropietarioResponse::from(propietario))
    }

    pub async fn update(
        &self,
        identificacion: i64,
        request: PropietarioRequest,
    ) -> AppResult<PropietarioResponse> {
        request.validate()?;
        if !self.repository.exists(identificacion).await? {
            return Err(AppError::NotFound("Propietario no encontrado".to_string()));
        }
        let propietario = self
            .repository
            .update(identificacion, &request.into_model())
            .await?;
        Ok(PropietarioResponse::from(propietario))
    }

    pub async fn delete(&self, identificacion: i64) -> AppResult<PropietarioResponse> {
        let propietario = self
            .repository
            .find_by_identificacion(identificacion)
            .await?
            .ok_or_else(|| AppError::NotFound("Propietario no encontrado".to_string()))?;
        self.repository.delete(identificacion).await?;
        Ok(PropietarioResponse::from(propietario))
    }
}
