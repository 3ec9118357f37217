//! Реестр JSON-кодеков
//!
//! Фиксированный набор конфигураций поверх serde_json: какие поля выводить,
//! добавлять ли дискриминатор класса в полиморфные поля и как писать ссылки
//! на модельные объекты.

pub mod codec;
pub mod inclusion;

pub use codec::{CodecError, JsonCodec};
pub use contracts::shared::polymorphic::CLASS_PROPERTY;
pub use inclusion::Inclusion;
