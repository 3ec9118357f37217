//! Field type enumeration for metadata system

/// Semantic category of a field's type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    Integer,
    Decimal,
    Boolean,
    /// NaiveDate or DateTime
    Date,
    /// DescribableEnum, stored by code
    Enum,
    /// Reference to a model object by ID
    AggregateRef {
        /// Target implements AutoCompleteObject
        auto_complete: bool,
    },
    /// Embedded struct (not Vec)
    NestedStruct,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Enum => "enum",
            Self::AggregateRef { .. } => "aggregate_ref",
            Self::NestedStruct => "nested_struct",
        }
    }

    pub fn is_model_ref(&self) -> bool {
        matches!(self, Self::AggregateRef { .. })
    }

    pub fn is_auto_complete(&self) -> bool {
        matches!(self, Self::AggregateRef { auto_complete: true })
    }
}
