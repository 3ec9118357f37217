use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use contracts::domain::a002_organization::aggregate::Organization;
use contracts::domain::a013_order::criteria::OrderCriteria;
use contracts::domain::common::{AutoCompleteObject, ModelRef, ModelResolver};
use contracts::enums::OrderStatus;
use contracts::shared::widget::WidgetDescriptor;
use serde::Serialize;

use super::json_response;
use crate::app_state::AppState;
use crate::shared::i18n::EnumDescriptions;
use crate::shared::json::{CodecError, JsonCodec};
use crate::shared::search_filter::{FilterError, SearchFilter};

const ORDERS_URL: &str = "/orders";
const ORGANIZATION_SEARCH_URL: &str = "/api/organization/search";

/// Описание формы фильтра заказов
#[derive(Debug, Clone, Serialize)]
pub struct OrderFilterResponse {
    pub widgets: Vec<WidgetDescriptor>,
    pub hide_form: bool,
    pub query_string: Option<String>,
    pub request_url: Option<String>,
    /// Подпись выбранной организации для поля автодополнения
    pub organization_label: Option<String>,
}

/// POST /api/orders/filter
///
/// Пустое тело или `null` дают критерии по умолчанию.
pub async fn filter(State(state): State<AppState>, body: String) -> Result<Response, StatusCode> {
    let mut criteria = decode_criteria(state.request_codec, &body).map_err(|e| {
        tracing::warn!("Invalid order criteria: {}", e);
        StatusCode::BAD_REQUEST
    })?;
    resolve_references(&mut criteria, state.organizations.as_ref());

    let response = build_order_filter(&criteria, &state.descriptions).map_err(|e| {
        tracing::error!("Failed to build order filter: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    json_response(state.response_codec, &response)
}

pub fn decode_criteria(codec: JsonCodec, body: &str) -> Result<OrderCriteria, CodecError> {
    Ok(codec.try_from_json(body)?.unwrap_or_default())
}

/// Подгрузить организацию, если в критериях пришёл только её id
pub fn resolve_references<R>(criteria: &mut OrderCriteria, organizations: &R)
where
    R: ModelResolver<Organization> + ?Sized,
{
    if let Some(organization) = criteria.organization.as_mut() {
        if organization.resolve(organizations).is_none() {
            tracing::debug!("Organization {} not found", organization.id());
        }
    }
}

/// Собрать форму фильтра для критериев
pub fn build_order_filter(
    criteria: &OrderCriteria,
    descriptions: &EnumDescriptions,
) -> Result<OrderFilterResponse, FilterError> {
    let mut filter = SearchFilter::new(criteria)?;
    filter
        .add_field("name")?
        .add_field("active")?
        .add_select_field("status", descriptions.enum_options::<OrderStatus>())?
        .add_field("created_from")?
        .add_field("created_to")?
        .add_auto_complete_field("organization", ORGANIZATION_SEARCH_URL)?
        .add_field("marketplace")?
        .add_field("tags")?
        .add_hidden_field("page.number")?
        .add_hidden_field("page.size")?;

    let hide_form = filter.is_hide_select_form();
    let query_string = filter.get_request_query_string();
    let request_url = filter.get_request_url(ORDERS_URL);
    let organization_label = criteria
        .organization
        .as_ref()
        .and_then(ModelRef::get)
        .map(AutoCompleteObject::auto_complete_label);

    Ok(OrderFilterResponse {
        widgets: filter.into_widgets(),
        hide_form,
        query_string,
        request_url,
        organization_label,
    })
}
