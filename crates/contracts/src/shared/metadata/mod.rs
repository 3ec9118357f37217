//! Metadata types for describing criteria fields
//!
//! Static descriptions of a criteria object's fields: UI label, semantic type
//! category and nesting. All types use 'static lifetimes so field tables can
//! be declared as compile-time constants.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::metadata::{find_field, FieldMetadata, FieldType};
//!
//! const FIELDS: &[FieldMetadata] = &[
//!     FieldMetadata::new("name", "Наименование", FieldType::Text),
//!     FieldMetadata::new("tags", "Метки", FieldType::Text).repeated(),
//! ];
//!
//! let field = find_field(FIELDS, "tags").unwrap();
//! println!("{}: {}", field.name, field.ui.label);
//! ```

mod field_type;
mod types;

pub use field_type::FieldType;
pub use types::{find_field, FieldMetadata, FieldUiMetadata};
