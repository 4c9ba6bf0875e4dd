use sqlx::PgPool;

use crate::models::tipo_vehiculo::TipoVehiculo;
use crate::utils::errors::{AppError, AppResult};

pub struct TipoVehiculoRepository {
    pool: PgPool,
}

impl TipoVehiculoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<TipoVehiculo>> {
        let tipos = sqlx::query_as::<_, TipoVehiculo>("SELECT * FROM tipo_vehiculo ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error listing tipos de vehiculo: {}", e)))?;

        Ok(tipos)
    }

    /// Insertar la etiqueta; el id lo asigna la secuencia y vuelve en la fila
    pub async fn create(&self, etiqueta: &str) -> AppResult<TipoVehiculo> {
        let tipo = sqlx::query_as::<_, TipoVehiculo>(
            "INSERT INTO tipo_vehiculo (tipo_vehiculo) VALUES ($1) RETURNING *",
        )
        .bind(etiqueta)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating tipo de vehiculo: {}", e)))?;

        Ok(tipo)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<TipoVehiculo>> {
        let tipo = sqlx::query_as::<_, TipoVehiculo>("SELECT * FROM tipo_vehiculo WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding tipo de vehiculo: {}", e)))?;

        Ok(tipo)
    }

    /// Reemplazo completo; el id mismo puede cambiar si el payload trae otro
    pub async fn update(&self, id: i64, tipo: &TipoVehiculo) -> AppResult<TipoVehiculo> {
        let actualizado = sqlx::query_as::<_, TipoVehiculo>(
            "UPDATE tipo_vehiculo SET id = $2, tipo_vehiculo = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(tipo.id)
        .bind(&tipo.tipo_vehiculo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating tipo de vehiculo: {}", e)))?;

        Ok(actualizado)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM tipo_vehiculo WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting tipo de vehiculo: {}", e)))?;

        Ok(())
    }

    /// Cantidad de vehículos que referencian este tipo
    pub async fn count_vehiculos(&self, id: i64) -> AppResult<i64> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM vehiculos WHERE tipo_vehiculo_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::Database(format!("Error counting vehiculos for tipo: {}", e))
                })?;

        Ok(result.0)
    }
}
