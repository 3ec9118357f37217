use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use backend::app_state::AppState;
use backend::domain::a002_organization::OrganizationRepository;
use backend::routes::configure_routes;
use backend::shared::config::{get_bundle_dir, load_config};
use backend::shared::i18n::MessageCatalog;
use backend::shared::logger;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

// Простой middleware для логирования запросов
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    tracing::info!(
        "{} {} {} | {}ms",
        response.status().as_u16(),
        method,
        uri.path(),
        start.elapsed().as_millis()
    );
    response
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init(&std::path::Path::new("target").join("logs"))?;

    let config = load_config()?;
    let bundle_dir = get_bundle_dir(&config);
    let catalog = MessageCatalog::load(
        &bundle_dir,
        &config.i18n.base_names,
        &config.i18n.locales,
        config.i18n.default_locale.clone(),
    )
    .map_err(|e| anyhow::anyhow!("message catalog init failed: {e}"))?;
    logger::log(
        "startup",
        &format!("Message bundles loaded from {}", bundle_dir.display()),
    );

    let state = AppState::new(&config, catalog, OrganizationRepository::with_demo_data());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = configure_routes(state)
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = config.server.bind.parse()?;
    let listener = TcpListener::bind(addr).await?;
    logger::log(
        "startup",
        &format!(
            "Listening on http://{} (request codec: {}, response codec: {})",
            addr, config.codec.request, config.codec.response
        ),
    );
    axum::serve(listener, app).await?;
    Ok(())
}
