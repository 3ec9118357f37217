use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::ModelObject;
use crate::enums::MarketplaceType;

/// Маркетплейс (торговая площадка)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marketplace {
    pub id: Uuid,
    pub code: String,
    pub description: String,
    pub url: String,

    #[serde(rename = "marketplaceType")]
    pub marketplace_type: Option<MarketplaceType>,
}

crate::impl_json_patch!(Marketplace {
    id,
    code,
    description,
    url,
    marketplace_type as "marketplaceType",
});

impl Marketplace {
    pub fn new(code: String, description: String, url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            description,
            url,
            marketplace_type: None,
        }
    }
}

impl ModelObject for Marketplace {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }
}
