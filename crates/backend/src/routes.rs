use axum::{
    routing::{get, post},
    Router,
};

use crate::app_state::AppState;
use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Описания перечислений
        .route("/api/enums/order_status", get(handlers::enums::order_status))
        .route(
            "/api/enums/marketplace_type",
            get(handlers::enums::marketplace_type),
        )
        // Organization handlers
        .route("/api/organization", get(handlers::a002_organization::list_all))
        .route(
            "/api/organization/search",
            get(handlers::a002_organization::search),
        )
        // Фильтр списка заказов
        .route("/api/orders/filter", post(handlers::order_search::filter))
        .with_state(state)
}
