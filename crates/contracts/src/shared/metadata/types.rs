//! Core metadata types for criteria fields
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::field_type::FieldType;

// ============================================================================
// Field-level metadata
// ============================================================================

/// Metadata for a single field
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMetadata {
    pub name: &'static str,
    pub field_type: FieldType,
    /// Array or Vec of `field_type` elements
    pub repeated: bool,
    pub ui: FieldUiMetadata,

    // For nested types (recursive reference via static slice)
    pub nested_fields: Option<&'static [FieldMetadata]>,
    pub ref_aggregate: Option<&'static str>,
}

impl FieldMetadata {
    pub const fn new(name: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            repeated: false,
            ui: FieldUiMetadata::labeled(label),
            nested_fields: None,
            ref_aggregate: None,
        }
    }

    /// Field without a label
    pub const fn unlabeled(name: &'static str, field_type: FieldType) -> Self {
        Self::new(name, "", field_type)
    }

    pub const fn repeated(self) -> Self {
        Self {
            repeated: true,
            ..self
        }
    }

    pub const fn nested(self, fields: &'static [FieldMetadata]) -> Self {
        Self {
            nested_fields: Some(fields),
            ..self
        }
    }

    pub const fn references(self, aggregate_index: &'static str) -> Self {
        Self {
            ref_aggregate: Some(aggregate_index),
            ..self
        }
    }

    pub const fn with_hint(self, hint: &'static str) -> Self {
        Self {
            ui: FieldUiMetadata {
                hint: Some(hint),
                ..self.ui
            },
            ..self
        }
    }

    /// Get nested fields metadata (for NestedStruct)
    pub fn nested_fields(&self) -> Option<&'static [FieldMetadata]> {
        self.nested_fields
    }

    /// Get referenced aggregate index (for AggregateRef)
    pub fn referenced_aggregate(&self) -> Option<&'static str> {
        self.ref_aggregate
    }

    pub fn label(&self) -> &'static str {
        self.ui.label
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub hint: Option<&'static str>,
}

impl FieldUiMetadata {
    pub const fn labeled(label: &'static str) -> Self {
        Self { label, hint: None }
    }
}

/// Find field metadata by name or dot path (`"page.size"`)
pub fn find_field(fields: &'static [FieldMetadata], path: &str) -> Option<&'static FieldMetadata> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut field = fields.iter().find(|f| f.name == first)?;
    for segment in segments {
        field = field
            .nested_fields?
            .iter()
            .find(|f| f.name == segment)?;
    }
    Some(field)
}
