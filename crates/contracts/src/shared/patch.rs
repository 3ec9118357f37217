//! Частичное обновление объекта из JSON
//!
//! Значение пишется прямо в поле по его JSON-имени. Остальные поля, в том
//! числе `#[serde(skip)]`, не трогаются.

use serde_json::Value;

/// Запись JSON-значения в поле объекта
pub trait JsonPatch {
    /// `Ok(false)`, если поля с таким JSON-именем нет
    fn patch_field(&mut self, name: &str, value: Value) -> Result<bool, serde_json::Error>;
}

/// Реализация `JsonPatch` по списку полей
///
/// ```rust,ignore
/// impl_json_patch!(Marketplace { id, code, marketplace_type as "marketplaceType" });
/// ```
#[macro_export]
macro_rules! impl_json_patch {
    ($ty:ty { $($field:ident $(as $name:literal)?),* $(,)? }) => {
        impl $crate::shared::patch::JsonPatch for $ty {
            fn patch_field(
                &mut self,
                name: &str,
                value: serde_json::Value,
            ) -> Result<bool, serde_json::Error> {
                $(
                    if name == $crate::__json_key!($field $(, $name)?) {
                        self.$field = serde_json::from_value(value)?;
                        return Ok(true);
                    }
                )*
                Ok(false)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __json_key {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $name:literal) => {
        $name
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq)]
    struct Item {
        title: String,
        count: i32,
        kind: Option<String>,
        cache: u64,
    }

    crate::impl_json_patch!(Item { title, count, kind as "itemKind" });

    #[test]
    fn test_patch_field() {
        let mut item = Item {
            cache: 7,
            ..Default::default()
        };
        assert!(item.patch_field("title", json!("a")).unwrap());
        assert!(item.patch_field("itemKind", json!("k")).unwrap());
        assert!(!item.patch_field("kind", json!("x")).unwrap());
        assert!(!item.patch_field("cache", json!(0)).unwrap());
        assert!(item.patch_field("count", json!("x")).is_err());

        assert_eq!(
            item,
            Item {
                title: "a".to_string(),
                count: 0,
                kind: Some("k".to_string()),
                cache: 7,
            }
        );
    }
}
