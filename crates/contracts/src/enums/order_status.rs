use super::describable::DescribableEnum;

/// Статус заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    New,
    Paid,
    Shipped,
    Cancelled,
}

impl DescribableEnum for OrderStatus {
    type Code = i32;

    fn type_name() -> &'static str {
        "OrderStatus"
    }

    fn variants() -> &'static [Self] {
        &[
            OrderStatus::New,
            OrderStatus::Paid,
            OrderStatus::Shipped,
            OrderStatus::Cancelled,
        ]
    }

    fn code(&self) -> i32 {
        match self {
            OrderStatus::New => 0,
            OrderStatus::Paid => 1,
            OrderStatus::Shipped => 2,
            OrderStatus::Cancelled => 3,
        }
    }

    fn constant_name(&self) -> &'static str {
        match self {
            OrderStatus::New => "NEW",
            OrderStatus::Paid => "PAID",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

crate::impl_code_serde!(OrderStatus, i32);
