use contracts::enums::DisplayType;
use contracts::shared::criteria::Criteria;
use contracts::shared::metadata::{FieldMetadata, FieldType};
use contracts::shared::widget::{FieldValue, SelectOption, WidgetDescriptor};
use serde_json::Value;
use thiserror::Error;

use super::query::{append_query_string, build_query_string};

static NULL: Value = Value::Null;

/// Ошибки построения фильтра
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Unknown criteria field: {0}")]
    UnknownField(String),

    #[error("Cannot read criteria: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Вид виджета по умолчанию для категории типа
///
/// Date: DATE; Enum и ссылки: HIDDEN; Boolean: CHECK_BOX; остальное: TEXT.
pub fn default_display_type(field_type: FieldType) -> DisplayType {
    match field_type {
        FieldType::Date => DisplayType::Date,
        FieldType::Enum | FieldType::AggregateRef { .. } => DisplayType::Hidden,
        FieldType::Boolean => DisplayType::CheckBox,
        FieldType::Text
        | FieldType::Integer
        | FieldType::Decimal
        | FieldType::NestedStruct => DisplayType::Text,
    }
}

/// Фильтр формы поиска
///
/// Виджеты идут в порядке добавления полей.
///
/// ```rust,ignore
/// let mut filter = SearchFilter::new(&criteria)?;
/// filter.add_field("name")?;
/// filter.add_auto_complete_field("organization", "/api/organization/search")?;
/// let url = filter.get_request_url("/orders");
/// ```
#[derive(Debug)]
pub struct SearchFilter<'a, C: Criteria> {
    criteria: &'a C,
    snapshot: Value,
    widgets: Vec<WidgetDescriptor>,
}

impl<'a, C: Criteria> SearchFilter<'a, C> {
    pub fn new(criteria: &'a C) -> Result<Self, FilterError> {
        Ok(Self {
            criteria,
            snapshot: serde_json::to_value(criteria)?,
            widgets: Vec::new(),
        })
    }

    pub fn criteria(&self) -> &'a C {
        self.criteria
    }

    pub fn widgets(&self) -> &[WidgetDescriptor] {
        &self.widgets
    }

    pub fn into_widgets(self) -> Vec<WidgetDescriptor> {
        self.widgets
    }

    /// Поле с видом по умолчанию и подписью из метаданных
    pub fn add_field(&mut self, name: &str) -> Result<&mut Self, FilterError> {
        let label = self.get_field_label(name);
        self.push_field(name, label, None, None)?;
        Ok(self)
    }

    /// Поле с видом по умолчанию и явной подписью
    pub fn add_field_with_label(&mut self, name: &str, label: &str) -> Result<&mut Self, FilterError> {
        self.push_field(name, label.to_string(), None, None)?;
        Ok(self)
    }

    /// Скрытое поле (без подписи)
    pub fn add_hidden_field(&mut self, name: &str) -> Result<&mut Self, FilterError> {
        self.push_field(name, String::new(), Some(DisplayType::Hidden), None)?;
        Ok(self)
    }

    /// Поле с автодополнением
    ///
    /// Нужны непустой url и ссылка на объект с автодополнением; иначе
    /// ссылка становится скрытым полем, а прочие поля получают вид по
    /// умолчанию.
    pub fn add_auto_complete_field(&mut self, name: &str, url: &str) -> Result<&mut Self, FilterError> {
        let label = self.get_field_label(name);
        self.push_field(name, label, Some(DisplayType::AutoComplete), Some(url))?;
        Ok(self)
    }

    /// SELECT с вариантами выбора; для булевых полей без вариантов: true/false
    pub fn add_select_field(&mut self, name: &str, options: Vec<SelectOption>) -> Result<&mut Self, FilterError> {
        let label = self.get_field_label(name);
        self.add_select_field_with_label(name, &label, options)
    }

    pub fn add_select_field_with_label(
        &mut self,
        name: &str,
        label: &str,
        options: Vec<SelectOption>,
    ) -> Result<&mut Self, FilterError> {
        let field = self.field(name)?;
        let value = FieldValue::from_json(field.field_type, self.value_of(name));
        let options = if field.field_type == FieldType::Boolean && options.is_empty() {
            SelectOption::booleans()
        } else {
            options
        };
        self.widgets
            .push(WidgetDescriptor::new(label, name, DisplayType::Select, value).with_options(options));
        Ok(self)
    }

    /// Все виджеты скрытые (или виджетов нет)
    pub fn is_hide_select_form(&self) -> bool {
        self.widgets.iter().all(WidgetDescriptor::is_hidden)
    }

    /// Query string текущих значений фильтра
    pub fn get_request_query_string(&self) -> Option<String> {
        build_query_string(&self.widgets)
    }

    /// Полный url запроса с текущими значениями фильтра
    pub fn get_request_url(&self, url: &str) -> Option<String> {
        append_query_string(url, self.get_request_query_string().as_deref())
    }

    /// Подпись поля из метаданных; пустая строка, если её нет
    pub fn get_field_label(&self, path: &str) -> String {
        C::field(path)
            .map(|field| field.label().to_string())
            .unwrap_or_default()
    }

    fn field(&self, name: &str) -> Result<&'static FieldMetadata, FilterError> {
        C::field(name).ok_or_else(|| FilterError::UnknownField(name.to_string()))
    }

    /// Значение из снимка по пути через точку; отсутствующее поле = null
    fn value_of(&self, path: &str) -> &Value {
        path.split('.')
            .try_fold(&self.snapshot, |value, segment| value.get(segment))
            .unwrap_or(&NULL)
    }

    fn push_field(
        &mut self,
        name: &str,
        label: String,
        kind: Option<DisplayType>,
        url: Option<&str>,
    ) -> Result<(), FilterError> {
        let field = self.field(name)?;
        let kind = kind.unwrap_or_else(|| default_display_type(field.field_type));
        let (kind, url) = resolve_kind(field.field_type, kind, url);

        let units: Vec<(Option<String>, FieldValue)> = match (field.repeated, self.value_of(name)) {
            (true, Value::Array(items)) if !items.is_empty() => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    (
                        Some(format!("{}_{}", name, i)),
                        FieldValue::from_json(field.field_type, item),
                    )
                })
                .collect(),
            (true, Value::Array(_)) | (true, Value::Null) => vec![(None, FieldValue::Null)],
            (_, value) => vec![(None, FieldValue::from_json(field.field_type, value))],
        };

        for (id, value) in units {
            let mut widget = WidgetDescriptor::new(label.clone(), name, kind, value);
            widget.id = id;
            widget.auto_complete_url = url.clone();
            self.widgets.push(widget);
        }
        Ok(())
    }
}

/// Итоговый вид виджета и url автодополнения
fn resolve_kind(
    field_type: FieldType,
    kind: DisplayType,
    url: Option<&str>,
) -> (DisplayType, Option<String>) {
    let url = url.map(str::trim).filter(|u| !u.is_empty());
    match (field_type, kind, url) {
        (FieldType::AggregateRef { auto_complete: true }, DisplayType::AutoComplete, Some(url)) => {
            (DisplayType::AutoComplete, Some(url.to_string()))
        }
        (FieldType::AggregateRef { .. }, DisplayType::AutoComplete, _) => (DisplayType::Hidden, None),
        (FieldType::AggregateRef { auto_complete: true }, _, _) => (DisplayType::Hidden, None),
        (_, DisplayType::AutoComplete, _) => (default_display_type(field_type), None),
        (_, kind, _) => (kind, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a002_organization::aggregate::Organization;
    use contracts::domain::a013_order::criteria::OrderCriteria;
    use contracts::domain::common::ModelRef;
    use contracts::enums::OrderStatus;

    fn organization() -> Organization {
        Organization::new(
            "ORG-1".to_string(),
            "Рога и копыта".to_string(),
            "7700000000".to_string(),
        )
    }

    #[test]
    fn test_query_string_and_urls() {
        let criteria = OrderCriteria {
            name: Some("a b".to_string()),
            active: Some(true),
            ..Default::default()
        };
        let mut filter = SearchFilter::new(&criteria).unwrap();
        filter.add_field("name").unwrap().add_field("active").unwrap();

        assert_eq!(filter.widgets()[0].kind, DisplayType::Text);
        assert_eq!(filter.widgets()[0].label, "Наименование");
        assert_eq!(filter.widgets()[1].kind, DisplayType::CheckBox);
        assert_eq!(
            filter.get_request_query_string().as_deref(),
            Some("name=a%20b&active=true")
        );
        assert_eq!(
            filter.get_request_url("/search").as_deref(),
            Some("/search?name=a%20b&active=true")
        );
        assert_eq!(
            filter.get_request_url("/search?x=1").as_deref(),
            Some("/search?x=1&name=a%20b&active=true")
        );
        assert_eq!(filter.get_request_url(""), None);
    }

    #[test]
    fn test_array_field_gives_widget_per_element() {
        let criteria = OrderCriteria {
            tags: vec!["x".to_string(), "y".to_string()],
            ..Default::default()
        };
        let mut filter = SearchFilter::new(&criteria).unwrap();
        filter.add_field("tags").unwrap();

        let ids: Vec<_> = filter.widgets().iter().map(|w| w.id.as_deref()).collect();
        assert_eq!(ids, vec![Some("tags_0"), Some("tags_1")]);
        assert!(filter.widgets().iter().all(|w| w.name == "tags"));
        assert_eq!(filter.widgets()[1].value, FieldValue::Text("y".to_string()));
        assert_eq!(
            filter.get_request_query_string().as_deref(),
            Some("tags=x&tags=y")
        );
    }

    #[test]
    fn test_empty_array_gives_single_null_widget() {
        let criteria = OrderCriteria::default();
        let mut filter = SearchFilter::new(&criteria).unwrap();
        filter.add_field("tags").unwrap().add_field("statuses").unwrap();

        assert_eq!(filter.widgets().len(), 2);
        assert_eq!(filter.widgets()[0].id, None);
        assert_eq!(filter.widgets()[0].value, FieldValue::Null);
        assert_eq!(filter.widgets()[1].kind, DisplayType::Hidden);
        assert_eq!(filter.get_request_query_string(), None);
    }

    #[test]
    fn test_default_display_types() {
        let criteria = OrderCriteria {
            status: Some(OrderStatus::Paid),
            created_from: NaiveDate::from_ymd_opt(2024, 2, 29),
            ..Default::default()
        };
        let mut filter = SearchFilter::new(&criteria).unwrap();
        filter
            .add_field("status")
            .unwrap()
            .add_field("created_from")
            .unwrap()
            .add_field("marketplace")
            .unwrap()
            .add_field("page.size")
            .unwrap();

        let kinds: Vec<_> = filter.widgets().iter().map(|w| w.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DisplayType::Hidden,
                DisplayType::Date,
                DisplayType::Hidden,
                DisplayType::Text
            ]
        );
        assert_eq!(
            filter.get_request_query_string().as_deref(),
            Some("status=1&created_from=2024-02-29&page.size=50")
        );
    }

    #[test]
    fn test_auto_complete_field() {
        let org = organization();
        let criteria = OrderCriteria {
            organization: Some(ModelRef::from(org.clone())),
            ..Default::default()
        };
        let mut filter = SearchFilter::new(&criteria).unwrap();
        filter
            .add_auto_complete_field("organization", "/api/organization/search")
            .unwrap();

        let widget = &filter.widgets()[0];
        assert_eq!(widget.kind, DisplayType::AutoComplete);
        assert_eq!(widget.auto_complete_url.as_deref(), Some("/api/organization/search"));
        assert_eq!(widget.label, "Организация");
        assert_eq!(widget.value, FieldValue::Ref(org.id.to_string()));
        assert_eq!(
            filter.get_request_query_string(),
            Some(format!("organization={}", org.id))
        );
    }

    #[test]
    fn test_auto_complete_downgrades() {
        let criteria = OrderCriteria {
            name: Some("x".to_string()),
            ..Default::default()
        };
        let mut filter = SearchFilter::new(&criteria).unwrap();
        filter
            .add_auto_complete_field("organization", "  ")
            .unwrap()
            .add_auto_complete_field("marketplace", "/api/marketplace/search")
            .unwrap()
            .add_auto_complete_field("name", "/api/names")
            .unwrap()
            .add_field("organization")
            .unwrap();

        let kinds: Vec<_> = filter.widgets().iter().map(|w| w.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DisplayType::Hidden,
                DisplayType::Hidden,
                DisplayType::Text,
                DisplayType::Hidden
            ]
        );
        assert!(filter.widgets().iter().all(|w| w.auto_complete_url.is_none()));
    }

    #[test]
    fn test_select_field() {
        let criteria = OrderCriteria {
            active: Some(false),
            ..Default::default()
        };
        let mut filter = SearchFilter::new(&criteria).unwrap();
        filter.add_select_field("active", vec![]).unwrap();
        filter
            .add_select_field_with_label(
                "status",
                "Статус заказа",
                vec![SelectOption::new(FieldValue::Enum("0".to_string()), "Новый")],
            )
            .unwrap();

        let active = &filter.widgets()[0];
        assert_eq!(active.kind, DisplayType::Select);
        assert_eq!(active.options, SelectOption::booleans());
        assert_eq!(active.value, FieldValue::Boolean(false));

        let status = &filter.widgets()[1];
        assert_eq!(status.label, "Статус заказа");
        assert_eq!(status.options.len(), 1);
        assert_eq!(status.value, FieldValue::Null);
    }

    #[test]
    fn test_select_on_repeated_field_keeps_list() {
        let criteria = OrderCriteria {
            statuses: vec![OrderStatus::New, OrderStatus::Cancelled],
            ..Default::default()
        };
        let mut filter = SearchFilter::new(&criteria).unwrap();
        filter.add_select_field("statuses", vec![]).unwrap();

        assert_eq!(filter.widgets().len(), 1);
        assert_eq!(
            filter.get_request_query_string().as_deref(),
            Some("statuses=0&statuses=3")
        );
    }

    #[test]
    fn test_hide_select_form() {
        let criteria = OrderCriteria::default();
        let mut filter = SearchFilter::new(&criteria).unwrap();
        assert!(filter.is_hide_select_form());

        filter.add_hidden_field("name").unwrap().add_field("status").unwrap();
        assert!(filter.is_hide_select_form());
        assert_eq!(filter.widgets()[0].label, "");

        filter.add_field("name").unwrap();
        assert!(!filter.is_hide_select_form());
    }

    #[test]
    fn test_field_labels() {
        let criteria = OrderCriteria::default();
        let filter = SearchFilter::new(&criteria).unwrap();
        assert_eq!(filter.get_field_label("created_to"), "Дата по");
        assert_eq!(filter.get_field_label("page.number"), "Страница");
        assert_eq!(filter.get_field_label("page"), "");
        assert_eq!(filter.get_field_label("page.missing"), "");
        assert_eq!(filter.get_field_label("missing"), "");
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let criteria = OrderCriteria::default();
        let mut filter = SearchFilter::new(&criteria).unwrap();
        assert!(matches!(
            filter.add_field("missing"),
            Err(FilterError::UnknownField(name)) if name == "missing"
        ));
        assert!(filter.add_select_field("page.missing", vec![]).is_err());
        assert!(filter.widgets().is_empty());
        assert_eq!(filter.criteria(), &criteria);
    }
}
