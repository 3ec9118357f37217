use super::AggregateId;

/// Доменный объект с идентификатором
///
/// Такие объекты передаются по ссылке (`ModelRef`), а не по значению.
pub trait ModelObject {
    type Id: AggregateId;

    fn id(&self) -> Self::Id;
}

/// Модельный объект, который можно выбрать через autocomplete
pub trait AutoCompleteObject: ModelObject {
    /// Текст для списка подсказок
    fn auto_complete_label(&self) -> String;
}

/// Поиск модельного объекта по идентификатору
pub trait ModelResolver<T: ModelObject> {
    fn find_by_id(&self, id: &T::Id) -> Option<T>;
}
