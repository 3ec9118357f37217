//! Полиморфные поля
//!
//! Поле с типом `Box<dyn Trait>` сериализуется как объект реализации. В
//! режиме `with_type_info` первым свойством пишется `"@class"` с явным
//! именем класса, по которому `Box<dyn Trait>` читается обратно.
//! Реализации трейта перечисляются в `impl_polymorphic!`.

use std::any::Any;
use std::cell::Cell;

/// Свойство-дискриминатор класса
pub const CLASS_PROPERTY: &str = "@class";

thread_local! {
    static TYPE_INFO: Cell<bool> = const { Cell::new(false) };
}

/// Выполнить `f`, записывая `"@class"` в полиморфных полях
pub fn with_type_info<R>(f: impl FnOnce() -> R) -> R {
    struct Restore(bool);

    impl Drop for Restore {
        fn drop(&mut self) {
            TYPE_INFO.with(|mode| mode.set(self.0));
        }
    }

    let _restore = Restore(TYPE_INFO.with(|mode| mode.replace(true)));
    f()
}

pub fn type_info() -> bool {
    TYPE_INFO.with(Cell::get)
}

/// Супертрейт базового трейта полиморфного поля
pub trait Polymorphic: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> Polymorphic for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Serialize для `dyn Base` и Deserialize для `Box<dyn Base>`
///
/// ```rust,ignore
/// pub trait Shape: Polymorphic { fn area(&self) -> f64; }
/// impl_polymorphic!(Shape { Square => "Square", Rect => "Rect" });
/// ```
///
/// Имена классов задаются явно и не зависят от путей модулей.
#[macro_export]
macro_rules! impl_polymorphic {
    ($base:ident { $($ty:ident => $class:literal),+ $(,)? }) => {
        impl serde::Serialize for dyn $base {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                #[derive(serde::Serialize)]
                #[serde(tag = "@class")]
                enum Tagged<'a> {
                    $(
                        #[serde(rename = $class)]
                        $ty(&'a $ty),
                    )+
                }

                let any = $crate::shared::polymorphic::Polymorphic::as_any(self);
                $(
                    if let Some(value) = any.downcast_ref::<$ty>() {
                        return if $crate::shared::polymorphic::type_info() {
                            serde::Serialize::serialize(&Tagged::$ty(value), serializer)
                        } else {
                            serde::Serialize::serialize(value, serializer)
                        };
                    }
                )+
                Err(<S::Error as serde::ser::Error>::custom(format!(
                    "unregistered {} implementation",
                    stringify!($base)
                )))
            }
        }

        impl<'de> serde::Deserialize<'de> for Box<dyn $base> {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                #[derive(serde::Deserialize)]
                #[serde(tag = "@class")]
                enum Tagged {
                    $(
                        #[serde(rename = $class)]
                        $ty($ty),
                    )+
                }

                Ok(match <Tagged as serde::Deserialize>::deserialize(deserializer)? {
                    $(Tagged::$ty(value) => Box::new(value),)+
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    trait Animal: Polymorphic {
        fn legs(&self) -> u32;
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Dog {
        name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Bird {
        wings: u32,
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Fish;

    impl Animal for Dog {
        fn legs(&self) -> u32 {
            4
        }
    }

    impl Animal for Bird {
        fn legs(&self) -> u32 {
            2
        }
    }

    impl Animal for Fish {
        fn legs(&self) -> u32 {
            0
        }
    }

    crate::impl_polymorphic!(Animal { Dog => "Dog", Bird => "Bird" });

    #[test]
    fn test_class_only_with_type_info() {
        let dog: Box<dyn Animal> = Box::new(Dog { name: "Rex".to_string() });
        assert_eq!(serde_json::to_value(&dog).unwrap(), json!({"name": "Rex"}));

        let json = with_type_info(|| serde_json::to_string(&dog)).unwrap();
        assert_eq!(json, r#"{"@class":"Dog","name":"Rex"}"#);
        assert!(!type_info());
    }

    #[test]
    fn test_read_by_class() {
        let animals: Vec<Box<dyn Animal>> =
            serde_json::from_str(r#"[{"@class":"Bird","wings":2},{"name":"Rex","@class":"Dog"}]"#)
                .unwrap();
        assert_eq!(animals[0].legs(), 2);
        assert_eq!(animals[1].legs(), 4);

        assert!(serde_json::from_str::<Box<dyn Animal>>(r#"{"@class":"Cat"}"#).is_err());
        assert!(serde_json::from_str::<Box<dyn Animal>>(r#"{"wings":2}"#).is_err());
    }

    #[test]
    fn test_unregistered_implementation() {
        let fish: Box<dyn Animal> = Box::new(Fish);
        assert_eq!(fish.legs(), 0);
        assert!(serde_json::to_value(&fish).is_err());
    }

    #[test]
    fn test_type_info_restored_after_panic() {
        let result = std::panic::catch_unwind(|| with_type_info(|| panic!("boom")));
        assert!(result.is_err());
        assert!(!type_info());
    }
}
