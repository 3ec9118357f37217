pub mod a002_organization;
pub mod a005_marketplace;
pub mod a013_order;
pub mod common;
