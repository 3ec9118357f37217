//! Ссылка на модельный объект
//!
//! `ModelRef` либо хранит загруженный объект, либо только его идентификатор.
//! В режиме ссылок (`with_reference_mode`) сериализуется только
//! идентификатор; при чтении голый идентификатор даёт неразрешённую ссылку,
//! которую потом можно загрузить через `ModelResolver`.

use std::cell::Cell;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ModelObject, ModelResolver};

thread_local! {
    static REFERENCE_MODE: Cell<bool> = const { Cell::new(false) };
}

/// Выполнить `f`, сериализуя все `ModelRef` только идентификатором
pub fn with_reference_mode<R>(f: impl FnOnce() -> R) -> R {
    struct Restore(bool);

    impl Drop for Restore {
        fn drop(&mut self) {
            REFERENCE_MODE.with(|mode| mode.set(self.0));
        }
    }

    let _restore = Restore(REFERENCE_MODE.with(|mode| mode.replace(true)));
    f()
}

fn reference_mode() -> bool {
    REFERENCE_MODE.with(Cell::get)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModelRef<T: ModelObject> {
    /// Известен только идентификатор
    Unresolved(T::Id),
    /// Объект загружен
    Loaded(T),
}

impl<T: ModelObject> ModelRef<T> {
    pub fn id(&self) -> T::Id {
        match self {
            ModelRef::Unresolved(id) => id.clone(),
            ModelRef::Loaded(model) => model.id(),
        }
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            ModelRef::Unresolved(_) => None,
            ModelRef::Loaded(model) => Some(model),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ModelRef::Loaded(_))
    }

    /// Загрузить объект по идентификатору, если ещё не загружен
    ///
    /// Если объект не найден, ссылка остаётся неразрешённой.
    pub fn resolve<R>(&mut self, resolver: &R) -> Option<&T>
    where
        R: ModelResolver<T> + ?Sized,
    {
        if let ModelRef::Unresolved(id) = self {
            if let Some(model) = resolver.find_by_id(id) {
                *self = ModelRef::Loaded(model);
            }
        }
        self.get()
    }
}

impl<T: ModelObject> From<T> for ModelRef<T> {
    fn from(model: T) -> Self {
        ModelRef::Loaded(model)
    }
}

impl<T> Serialize for ModelRef<T>
where
    T: ModelObject + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ModelRef::Loaded(model) if !reference_mode() => model.serialize(serializer),
            _ => self.id().serialize(serializer),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged, bound(deserialize = "T: Deserialize<'de>"))]
enum Repr<T: ModelObject> {
    Id(T::Id),
    Full(T),
}

impl<'de, T> Deserialize<'de> for ModelRef<T>
where
    T: ModelObject + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Repr::<T>::deserialize(deserializer)? {
            Repr::Id(id) => ModelRef::Unresolved(id),
            Repr::Full(model) => ModelRef::Loaded(model),
        })
    }
}
