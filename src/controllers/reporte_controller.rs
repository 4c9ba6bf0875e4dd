use sqlx::PgPool;

use crate::dto::reporte_dto::PropietarioVehiculoResponse;
use crate::repositories::propietario_repository::PropietarioRepository;
use crate::utils::errors::AppResult;

pub struct ReporteController {
    propietarios: PropietarioRepository,
}

impl ReporteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            propietarios: PropietarioRepository::new(pool),
        }
    }

    /// Vista denormalizada: cada propietario con a lo sumo un vehículo
    pub async fn datos_propietarios_vehiculos(
        &self,
    ) -> AppResult<Vec<PropietarioVehiculoResponse>> {
        let filas = self.propietarios.find_all_con_vehiculo().await?;
        Ok(filas
            .into_iter()
            .map(PropietarioVehiculoResponse::from)
            .collect())
    }
}
