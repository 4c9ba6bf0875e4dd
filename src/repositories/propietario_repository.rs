use sqlx::PgPool;

use crate::models::propietario::Propietario;
use crate::models::reporte::PropietarioVehiculoRow;
use crate::utils::errors::{AppError, AppResult};

pub struct PropietarioRepository {
    pool: PgPool,
}

impl PropietarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Propietario>> {
        let propietarios = sqlx::query_as::<_, Propietario>(
            "SELECT * FROM propietario ORDER BY identificacion",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing propietarios: {}", e)))?;

        Ok(propietarios)
    }

    pub async fn create(&self, propietario: &Propietario) -> AppResult<Propietario> {
        let creado = sqlx::query_as::<_, Propietario>(
            r#"
            INSERT INTO propietario (identificacion, nombre, apellido, fecha_nacimiento, direccion, telefono, email)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(propietario.identificacion)
        .bind(&propietario.nombre)
        .bind(&propietario.apellido)
        .bind(propietario.fecha_nacimiento)
        .bind(&propietario.direccion)
        .bind(propietario.telefono)
        .bind(&propietario.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating propietario: {}", e)))?;

        Ok(creado)
    }

    pub async fn find_by_identificacion(
        &self,
        identificacion: i64,
    ) -> AppResult<Option<Propietario>> {
        let propietario = sqlx::query_as::<_, Propietario>(
            "SELECT * FROM propietario WHERE identificacion = $1",
        )
        .bind(identificacion)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error finding propietario: {}", e)))?;

        Ok(propietario)
    }

    pub async fn exists(&self, identificacion: i64) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM propietario WHERE identificacion = $1)",
        )
        .bind(identificacion)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error checking propietario: {}", e)))?;

        Ok(result.0)
    }

    /// Reemplazo completo de la fila; la identificación misma puede cambiar
    /// si el payload trae una distinta a la de la ruta
    pub async fn update(
        &self,
        identificacion: i64,
        propietario: &Propietario,
    ) -> AppResult<Propietario> {
        let actualizado = sqlx::query_as::<_, Propietario>(
            r#"
            UPDATE propietario
            SET identificacion = $2, nombre = $3, apellido = $4, fecha_nacimiento = $5, direccion = $6, telefono = $7, email = $8
            WHERE identificacion = $1
            RETURNING *
            "#,
        )
        .bind(identificacion)
        .bind(propietario.identificacion)
        .bind(&propietario.nombre)
        .bind(&propietario.apellido)
        .bind(propietario.fecha_nacimiento)
        .bind(&propietario.direccion)
        .bind(propietario.telefono)
        .bind(&propietario.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating propietario: {}", e)))?;

        Ok(actualizado)
    }

    pub async fn delete(&self, identificacion: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM propietario WHERE identificacion = $1")
            .bind(identificacion)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting propietario: {}", e)))?;

        Ok(())
    }

    /// Una fila por propietario con a lo sumo un vehículo: el de placa menor,
    /// para que el "primero encontrado" sea consistente entre llamadas
    pub async fn find_all_con_vehiculo(&self) -> AppResult<Vec<PropietarioVehiculoRow>> {
        let filas = sqlx::query_as::<_, PropietarioVehiculoRow>(
            r#"
            SELECT p.identificacion, p.nombre, p.apellido, v.placa, v.marca, v.color
            FROM propietario p
            LEFT JOIN LATERAL (
                SELECT placa, marca, color
                FROM vehiculos
                WHERE propietario_identificacion = p.identificacion
                ORDER BY placa
                LIMIT 1
            ) v ON true
            ORDER BY p.identificacion
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error building propietarios report: {}", e)))?;

        Ok(filas)
    }
}
