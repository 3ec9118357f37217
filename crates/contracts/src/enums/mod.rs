pub mod describable;
pub mod display_type;
pub mod marketplace_type;
pub mod order_status;

pub use describable::DescribableEnum;
pub use display_type::DisplayType;
pub use marketplace_type::MarketplaceType;
pub use order_status::OrderStatus;
