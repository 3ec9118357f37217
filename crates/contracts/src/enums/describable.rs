//! Describable enums
//!
//! Перечисление, каждое значение которого несёт стабильный код (целый или
//! строковый) и получает человекочитаемое описание из каталога сообщений по
//! ключу `<type_name>_<constant_name>`.

use std::fmt;

/// Трейт для перечислений с кодом и описанием
///
/// Коды должны быть уникальны в пределах перечисления. Проверки нет:
/// за уникальность отвечает реализация.
pub trait DescribableEnum: Copy + Sized + 'static {
    /// Тип кода: `i32` или `&'static str`
    type Code: Copy + PartialEq + fmt::Debug + fmt::Display;

    /// Все значения перечисления в порядке объявления
    fn variants() -> &'static [Self];

    /// Стабильный код значения
    fn code(&self) -> Self::Code;

    /// Имя константы (например, "PAID")
    fn constant_name(&self) -> &'static str;

    /// Стабильное имя типа для ключей каталога
    ///
    /// Не зависит от пути модуля: ключи в бандлах переживают перенос типа.
    fn type_name() -> &'static str;

    /// Ключ описания в каталоге сообщений
    fn description_key(&self) -> String {
        format!("{}_{}", Self::type_name(), self.constant_name())
    }

    /// Поиск значения по коду
    ///
    /// Целые коды сравниваются численно, строковые по содержимому.
    /// Возвращает первое совпадение.
    fn from_code<C>(value: C) -> Option<Self>
    where
        Self::Code: PartialEq<C>,
    {
        Self::variants().iter().copied().find(|v| v.code() == value)
    }
}

/// Serialize/Deserialize по коду значения вместо имени варианта
///
/// Код пишется как newtype: сериализатор видит значение перечисления, а не
/// голое число или строку.
///
/// ```rust,ignore
/// impl_code_serde!(OrderStatus, i32);
/// impl_code_serde!(MarketplaceType, String);
/// ```
#[macro_export]
macro_rules! impl_code_serde {
    ($ty:ty, $owned:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_newtype_struct(
                    stringify!($ty),
                    &$crate::enums::DescribableEnum::code(self),
                )
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let code = <$owned as serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::enums::DescribableEnum>::variants()
                    .iter()
                    .copied()
                    .find(|v| $crate::enums::DescribableEnum::code(v) == code)
                    .ok_or_else(|| {
                        <D::Error as serde::de::Error>::custom(format!(
                            "unknown {} code: {}",
                            stringify!($ty),
                            code
                        ))
                    })
            }
        }
    };
}
