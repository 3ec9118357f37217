use std::sync::Arc;

use crate::domain::a002_organization::OrganizationRepository;
use crate::shared::config::Config;
use crate::shared::i18n::{EnumDescriptions, MessageCatalog};
use crate::shared::json::JsonCodec;

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub descriptions: Arc<EnumDescriptions>,
    /// Кодек для разбора тела запросов
    pub request_codec: JsonCodec,
    /// Кодек для ответов
    pub response_codec: JsonCodec,
    pub organizations: Arc<OrganizationRepository>,
}

impl AppState {
    pub fn new(config: &Config, catalog: MessageCatalog, organizations: OrganizationRepository) -> Self {
        Self {
            descriptions: Arc::new(EnumDescriptions::new(Arc::new(catalog))),
            request_codec: config.codec.request,
            response_codec: config.codec.response,
            organizations: Arc::new(organizations),
        }
    }
}
