use std::sync::Arc;

use contracts::enums::DescribableEnum;
use contracts::shared::widget::{FieldValue, SelectOption};
use serde::Serialize;

use super::catalog::{CatalogError, MessageCatalog};
use super::locale::Locale;

/// Значение перечисления для выдачи клиенту
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumEntry {
    pub code: String,
    pub name: &'static str,
    pub description: String,
}

/// Описания перечислений из каталога сообщений
#[derive(Debug, Clone)]
pub struct EnumDescriptions {
    catalog: Arc<MessageCatalog>,
    locale: Locale,
}

impl EnumDescriptions {
    /// Описания в локали каталога по умолчанию
    pub fn new(catalog: Arc<MessageCatalog>) -> Self {
        let locale = catalog.default_locale().clone();
        Self { catalog, locale }
    }

    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            locale,
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Пересобрать каталог из других бандлов
    ///
    /// Требует `&mut self`: вызывается на старте, до раздачи резолвера
    /// обработчикам.
    pub fn set_description_base_names(
        &mut self,
        base_names: &[impl AsRef<str>],
    ) -> Result<(), CatalogError> {
        let same = base_names.len() == self.catalog.base_names().len()
            && base_names
                .iter()
                .zip(self.catalog.base_names())
                .all(|(a, b)| a.as_ref().trim() == b);
        if same {
            return Ok(());
        }
        self.catalog = Arc::new(self.catalog.with_base_names(base_names)?);
        tracing::info!(
            "EnumDescriptions: catalog reloaded from {:?}",
            self.catalog.base_names()
        );
        Ok(())
    }

    /// Описание значения; пустая строка для `None` и отсутствующего ключа
    pub fn get_description<E: DescribableEnum>(&self, value: Option<&E>) -> String {
        self.get_description_in(value, &self.locale)
    }

    pub fn get_description_in<E: DescribableEnum>(&self, value: Option<&E>, locale: &Locale) -> String {
        match value {
            Some(value) => self
                .catalog
                .message(&value.description_key(), locale)
                .unwrap_or_default()
                .to_string(),
            None => String::new(),
        }
    }

    /// Значение перечисления по коду (линейный поиск, первое совпадение)
    pub fn get_enum<E, C>(&self, code: C) -> Option<E>
    where
        E: DescribableEnum,
        E::Code: PartialEq<C>,
    {
        E::from_code(code)
    }

    /// Варианты SELECT для всех значений перечисления
    pub fn enum_options<E: DescribableEnum>(&self) -> Vec<SelectOption> {
        E::variants()
            .iter()
            .map(|v| SelectOption::new(FieldValue::from_enum(v), self.get_description(Some(v))))
            .collect()
    }

    /// Все значения перечисления с кодами и описаниями
    pub fn entries<E: DescribableEnum>(&self) -> Vec<EnumEntry> {
        E::variants()
            .iter()
            .map(|v| EnumEntry {
                code: v.code().to_string(),
                name: v.constant_name(),
                description: self.get_description(Some(v)),
            })
            .collect()
    }
}
