use contracts::shared::widget::{FieldValue, WidgetDescriptor};

/// `name=value` пары в порядке виджетов, значения в UTF-8 percent-encoding
///
/// Списки дают пару на каждый элемент, Null пропускается. `None`, если
/// не получилось ни одной пары.
pub fn build_query_string(widgets: &[WidgetDescriptor]) -> Option<String> {
    let mut pairs = Vec::new();
    for widget in widgets {
        match &widget.value {
            FieldValue::List(items) => {
                for item in items {
                    push_pair(&mut pairs, &widget.name, item);
                }
            }
            value => push_pair(&mut pairs, &widget.name, value),
        }
    }
    if pairs.is_empty() {
        None
    } else {
        Some(pairs.join("&"))
    }
}

fn push_pair(pairs: &mut Vec<String>, name: &str, value: &FieldValue) {
    if let Some(value) = value.query_value() {
        pairs.push(format!("{}={}", name, urlencoding::encode(&value)));
    }
}

/// Дописать query string к url через `?` или `&`
///
/// `None` для пустого url; url без изменений, если строки запроса нет.
pub fn append_query_string(url: &str, query_string: Option<&str>) -> Option<String> {
    if url.trim().is_empty() {
        return None;
    }
    match query_string.filter(|qs| !qs.trim().is_empty()) {
        None => Some(url.to_string()),
        Some(qs) if url.contains('?') => Some(format!("{}&{}", url, qs)),
        Some(qs) => Some(format!("{}?{}", url, qs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::DisplayType;

    fn widget(name: &str, value: FieldValue) -> WidgetDescriptor {
        WidgetDescriptor::new("", name, DisplayType::Text, value)
    }

    #[test]
    fn test_query_string_encoding() {
        let widgets = vec![
            widget("name", FieldValue::Text("a b&c=д".to_string())),
            widget("empty", FieldValue::Null),
            widget(
                "ids",
                FieldValue::List(vec![
                    FieldValue::Integer(1),
                    FieldValue::Null,
                    FieldValue::Integer(2),
                ]),
            ),
        ];
        assert_eq!(
            build_query_string(&widgets).as_deref(),
            Some("name=a%20b%26c%3D%D0%B4&ids=1&ids=2")
        );
    }

    #[test]
    fn test_query_string_none() {
        assert_eq!(build_query_string(&[]), None);
        assert_eq!(build_query_string(&[widget("a", FieldValue::Null)]), None);
        assert_eq!(
            build_query_string(&[widget("a", FieldValue::List(vec![]))]),
            None
        );
    }

    #[test]
    fn test_append_query_string() {
        assert_eq!(
            append_query_string("/search", Some("a=1")).as_deref(),
            Some("/search?a=1")
        );
        assert_eq!(
            append_query_string("/search?x=1", Some("a=1")).as_deref(),
            Some("/search?x=1&a=1")
        );
        assert_eq!(append_query_string("/search", None).as_deref(), Some("/search"));
        assert_eq!(append_query_string(" ", Some("a=1")), None);
    }
}
