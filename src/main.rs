mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;
mod utils;

use anyhow::Result;
use axum::{extract::State, response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::connection::{create_pool, create_tables, mask_database_url};
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Gestor de Vehículos - API de registro vehicular");
    info!("==================================================");

    let config = EnvironmentConfig::from_env();
    if config.is_development() {
        info!("🔧 Entorno de desarrollo: CORS abierto por defecto");
    }

    // Inicializar base de datos
    info!("📦 Conectando a {}", mask_database_url(&config.database_url));
    let pool = match create_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Crear las tablas al arrancar si no existen (sin versionado de migraciones)
    if let Err(e) = create_tables(&pool).await {
        error!("❌ Error creando el schema: {}", e);
        return Err(anyhow::anyhow!("Error de schema: {}", e));
    }
    info!("✅ Schema verificado: propietario, tipo_vehiculo, vehiculos");

    // CORS abierto salvo que CORS_ORIGINS restrinja los orígenes
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .merge(routes::create_router())
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /test - Endpoint de prueba");
    info!("👤 Propietarios:");
    info!("   GET    /propietarios - Listar propietarios");
    info!("   POST   /propietarios - Crear propietario");
    info!("   GET    /propietarios/:identificacion - Obtener propietario");
    info!("   PUT    /propietarios/:identificacion - Reemplazar propietario");
    info!("   DELETE /propietarios/:identificacion - Eliminar propietario");
    info!("🏷️ Tipos de vehículo:");
    info!("   GET    /tipos_vehiculo - Listar tipos de vehículo");
    info!("   POST   /tipos_vehiculo - Crear tipo de vehículo");
    info!("   GET    /tipos_vehiculo/:id - Obtener tipo de vehículo");
    info!("   PUT    /tipos_vehiculo/:id - Reemplazar tipo de vehículo");
    info!("   DELETE /tipos_vehiculo/:id - Eliminar tipo de vehículo");
    info!("🚙 Vehículos:");
    info!("   GET    /vehiculos - Listar vehículos con su tipo");
    info!("   POST   /vehiculos - Crear vehículo");
    info!("   GET    /vehiculos/:placa - Obtener vehículo");
    info!("   PUT    /vehiculos/:placa - Reemplazar vehículo");
    info!("   DELETE /vehiculos/:placa - Eliminar vehículo");
    info!("📋 Reporte:");
    info!("   GET    /datos_propietarios_vehiculos - Propietarios con su vehículo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "message": "API Gestor de Vehículos funcionando correctamente",
        "status": "ok",
        "environment": state.config.environment,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
