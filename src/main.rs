use agency_backend::infrastructure::{database, storage};
use agency_backend::services::image_service::ImageService;
use agency_backend::services::model_service::ModelService;
use agency_backend::{AppState, create_app};
use clap::Parser;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port for the API server
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agency_backend=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚀 Starting Agency Backend...");

    let db = database::setup_database().await?;
    let storage_service = storage::setup_storage().await;

    let config = agency_backend::config::AppConfig::from_env();
    info!(
        "🛡️  Config: Max Upload={}MB, CORS Origins={}",
        config.max_upload_size / 1024 / 1024,
        config.allowed_origins.join(", ")
    );

    let state = AppState {
        db: db.clone(),
        storage: storage_service.clone(),
        model_service: Arc::new(ModelService::new(db.clone(), storage_service.clone())),
        image_service: Arc::new(ImageService::new(db.clone(), storage_service.clone())),
        config: config.clone(),
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
            )
        })
        .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
            info!("📥 {} {}", request.method(), request.uri());
        })
        .on_response(
            |response: &axum::http::Response<_>,
             latency: std::time::Duration,
             _span: &tracing::Span| {
                info!(
                    "📤 Finished in {:?} with status {}",
                    latency,
                    response.status()
                );
            },
        );

    let app = create_app(state).layer(trace_layer);
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("✅ API Server listening on: http://0.0.0.0:{}", args.port);
    info!(
        "📖 Swagger UI documentation: http://localhost:{}/swagger-ui",
        args.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shut down gracefully");
    Ok(())
}

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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
