use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a002_organization::aggregate::Organization;
use crate::domain::a005_marketplace::aggregate::Marketplace;
use crate::domain::common::ModelRef;
use crate::enums::OrderStatus;
use crate::shared::criteria::Criteria;
use crate::shared::metadata::{FieldMetadata, FieldType};

/// Критерии поиска заказов
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderCriteria {
    /// Поиск по номеру или наименованию
    pub name: Option<String>,
    /// Только активные
    pub active: Option<bool>,
    pub status: Option<OrderStatus>,
    pub statuses: Vec<OrderStatus>,
    pub created_from: Option<NaiveDate>,
    pub created_to: Option<NaiveDate>,
    pub organization: Option<ModelRef<Organization>>,
    pub marketplace: Option<ModelRef<Marketplace>>,
    pub tags: Vec<String>,
    pub page: PageCriteria,
}

/// Параметры страницы списка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageCriteria {
    pub number: i32,
    pub size: i32,
}

impl Default for PageCriteria {
    fn default() -> Self {
        Self { number: 1, size: 50 }
    }
}

const PAGE_FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("number", "Страница", FieldType::Integer),
    FieldMetadata::new("size", "Записей на странице", FieldType::Integer),
];

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Наименование", FieldType::Text),
    FieldMetadata::new("active", "Активные", FieldType::Boolean),
    FieldMetadata::new("status", "Статус", FieldType::Enum),
    FieldMetadata::new("statuses", "Статусы", FieldType::Enum).repeated(),
    FieldMetadata::new("created_from", "Дата с", FieldType::Date),
    FieldMetadata::new("created_to", "Дата по", FieldType::Date),
    FieldMetadata::new(
        "organization",
        "Организация",
        FieldType::AggregateRef { auto_complete: true },
    )
    .references("a002")
    .with_hint("Начните вводить наименование или ИНН"),
    FieldMetadata::new(
        "marketplace",
        "Маркетплейс",
        FieldType::AggregateRef { auto_complete: false },
    )
    .references("a005"),
    FieldMetadata::new("tags", "Метки", FieldType::Text).repeated(),
    FieldMetadata::new("page", "", FieldType::NestedStruct).nested(PAGE_FIELDS),
];

impl Criteria for OrderCriteria {
    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }
}

crate::impl_json_patch!(OrderCriteria {
    name,
    active,
    status,
    statuses,
    created_from,
    created_to,
    organization,
    marketplace,
    tags,
    page,
});

crate::impl_json_patch!(PageCriteria { number, size });
