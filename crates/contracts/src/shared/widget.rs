//! Дескрипторы виджетов формы фильтра
//!
//! Описание одного поля формы поиска без привязки к способу отрисовки:
//! вид виджета, подпись, текущее значение и варианты выбора.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{DescribableEnum, DisplayType};
use crate::shared::metadata::FieldType;

/// Текущее значение поля критерия
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    #[default]
    Null,
    Text(String),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    Date(NaiveDate),
    /// Код описываемого перечисления
    Enum(String),
    /// Идентификатор модельного объекта
    Ref(String),
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Типизировать JSON-значение поля по категории из метаданных
    pub fn from_json(field_type: FieldType, value: &Value) -> Self {
        match (field_type, value) {
            (_, Value::Null) => FieldValue::Null,
            (_, Value::Array(items)) => {
                FieldValue::List(items.iter().map(|v| Self::from_json(field_type, v)).collect())
            }
            (FieldType::Boolean, Value::Bool(b)) => FieldValue::Boolean(*b),
            (FieldType::Integer, Value::Number(n)) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => FieldValue::Decimal(n.as_f64().unwrap_or_default()),
            },
            (FieldType::Decimal, Value::Number(n)) => {
                FieldValue::Decimal(n.as_f64().unwrap_or_default())
            }
            (FieldType::Date, Value::String(s)) => parse_date(s)
                .map(FieldValue::Date)
                .unwrap_or_else(|| FieldValue::Text(s.clone())),
            (FieldType::Enum, Value::String(s)) => FieldValue::Enum(s.clone()),
            (FieldType::Enum, Value::Number(n)) => FieldValue::Enum(n.to_string()),
            (FieldType::AggregateRef { .. }, Value::Object(map)) => match map.get("id") {
                Some(Value::String(id)) => FieldValue::Ref(id.clone()),
                Some(Value::Null) | None => FieldValue::Null,
                Some(id) => FieldValue::Ref(id.to_string()),
            },
            (FieldType::AggregateRef { .. }, Value::String(id)) => FieldValue::Ref(id.clone()),
            (FieldType::AggregateRef { .. }, other) => FieldValue::Ref(other.to_string()),
            (_, Value::String(s)) => FieldValue::Text(s.clone()),
            (_, Value::Bool(b)) => FieldValue::Boolean(*b),
            (_, Value::Number(n)) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => FieldValue::Decimal(n.as_f64().unwrap_or_default()),
            },
            (_, other) => FieldValue::Text(other.to_string()),
        }
    }

    /// Значение перечисления по его коду
    pub fn from_enum<E: DescribableEnum>(value: &E) -> Self {
        FieldValue::Enum(value.code().to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Строковое значение для query string; `None` для Null и List
    pub fn query_value(&self) -> Option<String> {
        match self {
            FieldValue::Null | FieldValue::List(_) => None,
            FieldValue::Text(s) | FieldValue::Enum(s) | FieldValue::Ref(s) => Some(s.clone()),
            FieldValue::Integer(i) => Some(i.to_string()),
            FieldValue::Decimal(d) => Some(d.to_string()),
            FieldValue::Boolean(b) => Some(b.to_string()),
            FieldValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Вариант выбора для SELECT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub value: FieldValue,
    #[serde(default)]
    pub label: String,
}

impl SelectOption {
    pub fn new(value: FieldValue, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    /// Варианты `true` / `false` для булевых полей
    pub fn booleans() -> Vec<SelectOption> {
        vec![
            SelectOption::new(FieldValue::Boolean(true), "true"),
            SelectOption::new(FieldValue::Boolean(false), "false"),
        ]
    }
}

/// Один виджет формы фильтра
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    /// Имя поля критерия (name в html)
    #[serde(default)]
    pub name: String,
    /// `<name>_<index>` для элементов массива
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub label: String,
    pub kind: DisplayType,
    #[serde(default)]
    pub value: FieldValue,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_complete_url: Option<String>,
}

impl WidgetDescriptor {
    pub fn new(
        label: impl Into<String>,
        name: impl Into<String>,
        kind: DisplayType,
        value: FieldValue,
    ) -> Self {
        Self {
            name: name.into(),
            id: None,
            label: label.into(),
            kind,
            value,
            options: Vec::new(),
            auto_complete_url: None,
        }
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// id в html: явный id или имя поля
    pub fn html_id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }

    pub fn is_hidden(&self) -> bool {
        self.kind.is_hidden()
    }
}
