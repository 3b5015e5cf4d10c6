use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use parcel_dispatch::config::environment::EnvironmentConfig;
use parcel_dispatch::database::DatabaseConnection;
use parcel_dispatch::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use parcel_dispatch::routes;
use parcel_dispatch::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 Parcel Dispatch - Back office de bookings y flota");
    info!("====================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Aplicar migraciones embebidas
    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Error aplicando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }

    let pool = db_connection.pool().clone();
    let config = EnvironmentConfig::default();
    let app_state = AppState::new(pool, config.clone());

    // CORS: permisivo salvo que CORS_ORIGINS restrinja los orígenes
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    // Crear router de la API
    let app = Router::new()
        .route("/health", get(health_endpoint))
        .merge(routes::create_api_router(app_state.clone()))
        .layer(cors)
        .with_state(app_state);

    // Puerto del servidor
    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🏢 Company:");
    info!("   POST /api/company/register - Registrar compañía");
    info!("   POST /api/company/login - Login compañía");
    info!("   GET  /api/company/me - Compañía autenticada");
    info!("   GET  /api/company - Listar compañías");
    info!("📦 Bookings:");
    info!("   POST /api/bookings - Crear booking");
    info!("   POST /api/bookings/batch - Crear lote de bookings");
    info!("   GET  /api/bookings - Listar bookings (filtros + paginación)");
    info!("   GET  /api/bookings/assignable - Bookings asignables");
    info!("   GET  /api/bookings/lr/:lr_number - Lookup por número LR");
    info!("   GET  /api/bookings/:id - Obtener booking");
    info!("   PUT  /api/bookings/:id - Actualizar status/asignación");
    info!("👤 Consignees:");
    info!("   POST /api/consignees - Registrar consignatario");
    info!("   GET  /api/consignees - Listar por compañía");
    info!("   GET  /api/consignees/pending - Cola de aprobación");
    info!("   GET  /api/consignees/approved - Aprobados por compañía");
    info!("   PUT  /api/consignees/:id/approve - Aprobar");
    info!("   PUT  /api/consignees/:id/reject - Rechazar");
    info!("   PUT  /api/consignees/:id - Actualizar");
    info!("   DELETE /api/consignees/:id - Eliminar");
    info!("💰 Rate cards:");
    info!("   POST /api/rate-cards - Crear tarjeta (desactiva anteriores)");
    info!("   GET  /api/rate-cards - Historial por compañía");
    info!("   GET  /api/rate-cards/active - Tarjeta activa");
    info!("🚗 Vehicles:");
    info!("   POST /api/vehicles - Crear vehículo");
    info!("   GET  /api/vehicles - Listar con carga IN-TRANSIT");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!("   PUT  /api/vehicles/:id - Actualizar vehículo");
    info!("   POST /api/vehicles/:id/assign - Asignar bookings");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo");
    info!("🪪 Drivers:");
    info!("   POST /api/drivers - Registrar conductor");
    info!("   GET  /api/drivers - Listar conductores");
    info!("   GET  /api/drivers/:id - Obtener conductor");
    info!("   PUT  /api/drivers/:id - Actualizar conductor");
    info!("   DELETE /api/drivers/:id - Eliminar conductor");
    info!("📊 Dashboard:");
    info!("   GET  /api/dashboard/summary - Conteos de actividad");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "service": "parcel_dispatch",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339()
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
