//! Локализованные описания перечислений
//!
//! Каталог сообщений загружается один раз при старте из TOML-бандлов и
//! дальше передаётся компонентам через `Arc`.

pub mod catalog;
pub mod descriptions;
pub mod locale;

pub use catalog::{CatalogError, MessageCatalog};
pub use descriptions::{EnumDescriptions, EnumEntry};
pub use locale::Locale;
