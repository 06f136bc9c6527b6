//! REST surface over the persistence store, plus static assets and the
//! server-rendered map.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tokio::signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use config::Config;
use state::AppState;

pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/states", get(routes::get_states))
        .route(
            "/api/states/{state_id}",
            post(routes::set_state).delete(routes::delete_state),
        )
        .route(
            "/api/settings",
            get(routes::get_settings).post(routes::put_setting),
        )
        .route("/api/stats", get(routes::get_stats))
        .route("/api/list/{category}", get(routes::get_list))
        .route("/api/reset", post(routes::reset))
        .route("/map.svg", get(routes::map_svg))
        .fallback_service(ServeDir::new(&app_state.config.assets_dir))
        .with_state(app_state)
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let app_state = AppState::new(config).await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = router(app_state.clone())
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let address = format!("0.0.0.0:{}", app_state.config.port);
    let listener = TcpListener::bind(&address).await?;
    info!("State tracker running on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
