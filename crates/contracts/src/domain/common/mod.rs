//! Common types and traits for model objects

pub mod aggregate_id;
pub mod model_object;
pub mod model_ref;

// Re-exports
pub use aggregate_id::AggregateId;
pub use model_object::{AutoCompleteObject, ModelObject, ModelResolver};
pub use model_ref::{with_reference_mode, ModelRef};
