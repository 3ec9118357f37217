use std::str::FromStr;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use contracts::enums::{DescribableEnum, MarketplaceType, OrderStatus};
use serde::Deserialize;

use super::{json_response, jsonp_response};
use crate::app_state::AppState;
use crate::shared::i18n::Locale;

#[derive(Debug, Default, Deserialize)]
pub struct EnumQuery {
    /// Локаль описаний, например `en` или `ru_RU`
    pub lang: Option<String>,
    /// Имя функции для JSONP
    pub callback: Option<String>,
}

/// GET /api/enums/order_status
pub async fn order_status(
    State(state): State<AppState>,
    Query(query): Query<EnumQuery>,
) -> Result<Response, StatusCode> {
    entries::<OrderStatus>(&state, &query)
}

/// GET /api/enums/marketplace_type
pub async fn marketplace_type(
    State(state): State<AppState>,
    Query(query): Query<EnumQuery>,
) -> Result<Response, StatusCode> {
    entries::<MarketplaceType>(&state, &query)
}

fn entries<E: DescribableEnum>(state: &AppState, query: &EnumQuery) -> Result<Response, StatusCode> {
    let descriptions = match query.lang.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        Some(lang) => {
            let locale = Locale::from_str(lang).map_err(|_| StatusCode::BAD_REQUEST)?;
            state.descriptions.with_locale(locale)
        }
        None => state.descriptions.as_ref().clone(),
    };
    let entries = descriptions.entries::<E>();
    match query.callback.as_deref() {
        Some(callback) => jsonp_response(state.response_codec, callback, &entries),
        None => json_response(state.response_codec, &entries),
    }
}
