use super::describable::DescribableEnum;

/// Типы маркетплейсов
///
/// Код строковый, описание берётся из каталога сообщений.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketplaceType {
    Ozon,
    Wildberries,
    YandexMarket,
    Kuper,
    LemanaPro,
}

impl DescribableEnum for MarketplaceType {
    type Code = &'static str;

    fn type_name() -> &'static str {
        "MarketplaceType"
    }

    fn variants() -> &'static [Self] {
        &[
            MarketplaceType::Ozon,
            MarketplaceType::Wildberries,
            MarketplaceType::YandexMarket,
            MarketplaceType::Kuper,
            MarketplaceType::LemanaPro,
        ]
    }

    /// Код маркетплейса
    fn code(&self) -> &'static str {
        match self {
            MarketplaceType::Ozon => "mp-ozon",
            MarketplaceType::Wildberries => "mp-wb",
            MarketplaceType::YandexMarket => "mp-ym",
            MarketplaceType::Kuper => "mp-kuper",
            MarketplaceType::LemanaPro => "mp-lemana",
        }
    }

    fn constant_name(&self) -> &'static str {
        match self {
            MarketplaceType::Ozon => "OZON",
            MarketplaceType::Wildberries => "WILDBERRIES",
            MarketplaceType::YandexMarket => "YANDEX_MARKET",
            MarketplaceType::Kuper => "KUPER",
            MarketplaceType::LemanaPro => "LEMANA_PRO",
        }
    }
}

crate::impl_code_serde!(MarketplaceType, String);

impl std::fmt::Display for MarketplaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
