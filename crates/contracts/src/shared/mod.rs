pub mod criteria;
pub mod metadata;
pub mod patch;
pub mod polymorphic;
pub mod widget;
