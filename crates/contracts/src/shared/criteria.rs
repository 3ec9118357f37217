use serde::Serialize;

use super::metadata::{find_field, FieldMetadata};

/// Объект критериев поиска
///
/// Фильтр читает значения через сериализованный снимок объекта, а типы
/// и подписи полей берёт из статических метаданных.
pub trait Criteria: Serialize {
    /// Метаданные полей критерия
    fn field_metadata() -> &'static [FieldMetadata];

    /// Метаданные поля по имени или пути через точку
    fn field(path: &str) -> Option<&'static FieldMetadata> {
        find_field(Self::field_metadata(), path)
    }
}
