use sqlx::PgPool;

use crate::models::vehiculo::{Vehiculo, VehiculoConTipo};
use crate::utils::errors::{AppError, AppResult};

pub struct VehiculoRepository {
    pool: PgPool,
}

impl VehiculoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listado con la etiqueta del tipo resuelta vía JOIN explícito
    pub async fn find_all_con_tipo(&self) -> AppResult<Vec<VehiculoConTipo>> {
        let vehiculos = sqlx::query_as::<_, VehiculoConTipo>(
            r#"
            SELECT v.placa, v.marca, v.vin, v.linea, v.cilindrada, v.color, v.chasis,
                   v.modelo, v.propietario_identificacion, t.tipo_vehiculo
            FROM vehiculos v
            INNER JOIN tipo_vehiculo t ON t.id = v.tipo_vehiculo_id
            ORDER BY v.placa
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing vehiculos: {}", e)))?;

        Ok(vehiculos)
    }

    pub async fn find_by_placa_con_tipo(&self, placa: &str) -> AppResult<Option<VehiculoConTipo>> {
        let vehiculo = sqlx::query_as::<_, VehiculoConTipo>(
            r#"
            SELECT v.placa, v.marca, v.vin, v.linea, v.cilindrada, v.color, v.chasis,
                   v.modelo, v.propietario_identificacion, t.tipo_vehiculo
            FROM vehiculos v
            INNER JOIN tipo_vehiculo t ON t.id = v.tipo_vehiculo_id
            WHERE v.placa = $1
            "#,
        )
        .bind(placa)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error finding vehiculo: {}", e)))?;

        Ok(vehiculo)
    }

    pub async fn exists(&self, placa: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehiculos WHERE placa = $1)")
                .bind(placa)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error checking placa: {}", e)))?;

        Ok(result.0)
    }

    pub async fn create(&self, vehiculo: &Vehiculo) -> AppResult<Vehiculo> {
        let creado = sqlx::query_as::<_, Vehiculo>(
            r#"
            INSERT INTO vehiculos (placa, marca, vin, linea, cilindrada, color, chasis, modelo, propietario_identificacion, tipo_vehiculo_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&vehiculo.placa)
        .bind(&vehiculo.marca)
        .bind(&vehiculo.vin)
        .bind(&vehiculo.linea)
        .bind(&vehiculo.cilindrada)
        .bind(&vehiculo.color)
        .bind(&vehiculo.chasis)
        .bind(&vehiculo.modelo)
        .bind(vehiculo.propietario_identificacion)
        .bind(vehiculo.tipo_vehiculo_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating vehiculo: {}", e)))?;

        Ok(creado)
    }

    /// Reemplazo completo de la fila; la placa misma puede cambiar si el
    /// payload trae una distinta a la de la ruta
    pub async fn update(&self, placa: &str, vehiculo: &Vehiculo) -> AppResult<Vehiculo> {
        let actualizado = sqlx::query_as::<_, Vehiculo>(
            r#"
            UPDATE vehiculos
            SET placa = $2, marca = $3, vin = $4, linea = $5, cilindrada = $6, color = $7,
                chasis = $8, modelo = $9, propietario_identificacion = $10, tipo_vehiculo_id = $11
            WHERE placa = $1
            RETURNING *
            "#,
        )
        .bind(placa)
        .bind(&vehiculo.placa)
        .bind(&vehiculo.marca)
        .bind(&vehiculo.vin)
        .bind(&vehiculo.linea)
        .bind(&vehiculo.cilindrada)
        .bind(&vehiculo.color)
        .bind(&vehiculo.chasis)
        .bind(&vehiculo.modelo)
        .bind(vehiculo.propietario_identificacion)
        .bind(vehiculo.tipo_vehiculo_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating vehiculo: {}", e)))?;

        Ok(actualizado)
    }

    pub async fn delete(&self, placa: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM vehiculos WHERE placa = $1")
            .bind(placa)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting vehiculo: {}", e)))?;

        Ok(())
    }
}
