use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::locale::Locale;

/// Ошибки загрузки каталога сообщений
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Cannot read bundle {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid bundle {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("No bundle base names configured")]
    NoBaseNames,
}

/// Неизменяемый каталог сообщений `locale -> key -> label`
///
/// Бандлы лежат в `bundle_dir` и называются `<base>[_<locale>].toml`.
/// Если ключ есть в нескольких бандлах, побеждает первый базовый в списке.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    bundle_dir: PathBuf,
    base_names: Vec<String>,
    locales: Vec<Locale>,
    default_locale: Locale,
    // ключ верхнего уровня: Locale::tag()
    messages: HashMap<String, HashMap<String, String>>,
}

impl MessageCatalog {
    /// Пустой каталог (все описания будут пустыми)
    pub fn empty(default_locale: Locale) -> Self {
        Self {
            default_locale,
            ..Self::default()
        }
    }

    /// Загрузить бандлы для указанных локалей
    ///
    /// Отсутствующий файл пропускается, нечитаемый или битый файл даёт ошибку.
    pub fn load(
        bundle_dir: impl Into<PathBuf>,
        base_names: &[impl AsRef<str>],
        locales: &[Locale],
        default_locale: Locale,
    ) -> Result<Self, CatalogError> {
        let base_names: Vec<String> = base_names
            .iter()
            .map(|b| b.as_ref().trim().to_string())
            .filter(|b| !b.is_empty())
            .collect();
        if base_names.is_empty() {
            return Err(CatalogError::NoBaseNames);
        }

        let mut catalog = Self {
            bundle_dir: bundle_dir.into(),
            base_names,
            locales: locales.to_vec(),
            default_locale,
            messages: HashMap::new(),
        };

        let mut tags: Vec<Locale> = Vec::new();
        for locale in catalog.locales.iter().chain(std::iter::once(&catalog.default_locale)) {
            for candidate in locale.fallback_chain() {
                if !tags.contains(&candidate) {
                    tags.push(candidate);
                }
            }
        }

        for locale in &tags {
            if let Some(bundle) = catalog.load_locale(locale)? {
                tracing::debug!(
                    "MessageCatalog: {} messages for locale '{}'",
                    bundle.len(),
                    locale
                );
                catalog.messages.insert(locale.tag(), bundle);
            }
        }

        Ok(catalog)
    }

    /// Перезагрузить каталог с другим набором базовых имён
    pub fn with_base_names(&self, base_names: &[impl AsRef<str>]) -> Result<Self, CatalogError> {
        Self::load(
            self.bundle_dir.clone(),
            base_names,
            &self.locales,
            self.default_locale.clone(),
        )
    }

    /// Добавить сообщение вручную (для тестов и встроенных описаний)
    pub fn with_message(mut self, locale: &Locale, key: &str, message: &str) -> Self {
        self.messages
            .entry(locale.tag())
            .or_default()
            .insert(key.to_string(), message.to_string());
        self
    }

    pub fn base_names(&self) -> &[String] {
        &self.base_names
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Найти сообщение по цепочке локали: `ru_RU -> ru -> корень`
    ///
    /// Если для запрошенной локали нет ни одного бандла, поиск идёт по
    /// цепочке локали по умолчанию.
    pub fn message(&self, key: &str, locale: &Locale) -> Option<&str> {
        let chain = if self.has_bundle_for(locale) {
            locale.fallback_chain()
        } else {
            self.default_locale.fallback_chain()
        };
        for candidate in chain {
            if let Some(message) = self
                .messages
                .get(&candidate.tag())
                .and_then(|bundle| bundle.get(key))
            {
                return Some(message.as_str());
            }
        }
        None
    }

    fn has_bundle_for(&self, locale: &Locale) -> bool {
        locale
            .fallback_chain()
            .iter()
            .any(|candidate| !candidate.is_root() && self.messages.contains_key(&candidate.tag()))
    }

    /// `None`, если ни одного файла для локали нет
    fn load_locale(&self, locale: &Locale) -> Result<Option<HashMap<String, String>>, CatalogError> {
        let mut bundle = HashMap::new();
        let mut found = false;
        for base in &self.base_names {
            let file_name = if locale.is_root() {
                format!("{}.toml", base)
            } else {
                format!("{}_{}.toml", base, locale.tag())
            };
            let path = self.bundle_dir.join(file_name);
            if !path.exists() {
                tracing::debug!("MessageCatalog: bundle not found: {}", path.display());
                continue;
            }
            found = true;
            for (key, message) in read_bundle(&path)? {
                bundle.entry(key).or_insert(message);
            }
        }
        Ok(found.then_some(bundle))
    }
}

fn read_bundle(path: &Path) -> Result<Vec<(String, String)>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let table: toml::Table = toml::from_str(&contents).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let mut entries = Vec::new();
    flatten("", &table, &mut entries, path);
    Ok(entries)
}

/// Вложенные таблицы склеиваются через `_`: `[Type] PAID = ".."` -> `Type_PAID`
fn flatten(prefix: &str, table: &toml::Table, out: &mut Vec<(String, String)>, path: &Path) {
    for (key, value) in table {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}_{}", prefix, key)
        };
        match value {
            toml::Value::String(s) => out.push((full_key, s.clone())),
            toml::Value::Table(nested) => flatten(&full_key, nested, out, path),
            other => {
                tracing::warn!(
                    "MessageCatalog: skipping non-string entry '{}' ({}) in {}",
                    full_key,
                    other.type_str(),
                    path.display()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Временный каталог с бандлами, удаляется в Drop
    struct BundleDir(PathBuf);

    impl BundleDir {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "webcore_catalog_{}_{}",
                name,
                uuid::Uuid::new_v4()
            ));
            std::fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn write(&self, file: &str, contents: &str) -> &Self {
            std::fs::write(self.0.join(file), contents).unwrap();
            self
        }
    }

    impl Drop for BundleDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn ru() -> Locale {
        Locale::new("ru", None)
    }

    #[test]
    fn test_locale_fallback() {
        let dir = BundleDir::new("fallback");
        dir.write("enums.toml", "\"Status_NEW\" = \"New\"\n\"Status_PAID\" = \"Paid\"\n")
            .write("enums_ru.toml", "\"Status_NEW\" = \"Новый\"\n");

        let catalog = MessageCatalog::load(&dir.0, &["enums"], &[ru()], ru()).unwrap();
        assert_eq!(catalog.message("Status_NEW", &ru()), Some("Новый"));
        assert_eq!(catalog.message("Status_PAID", &ru()), Some("Paid"));
        assert_eq!(
            catalog.message("Status_NEW", &Locale::new("ru", Some("RU"))),
            Some("Новый")
        );
        assert_eq!(catalog.message("Status_MISSING", &ru()), None);
    }

    #[test]
    fn test_unknown_locale_uses_default() {
        let dir = BundleDir::new("default");
        dir.write("enums.toml", "\"K\" = \"root\"\n")
            .write("enums_ru.toml", "\"K\" = \"ru\"\n")
            .write("enums_en.toml", "\"K\" = \"en\"\n");

        let catalog =
            MessageCatalog::load(&dir.0, &["enums"], &[Locale::new("en", None)], ru()).unwrap();
        assert_eq!(catalog.message("K", &Locale::new("en", None)), Some("en"));
        assert_eq!(catalog.message("K", &Locale::new("de", None)), Some("ru"));
        assert_eq!(catalog.message("K", &Locale::root()), Some("ru"));
    }

    #[test]
    fn test_existing_locale_does_not_use_default() {
        let dir = BundleDir::new("partial");
        dir.write("enums.toml", "\"A\" = \"root A\"\n")
            .write("enums_ru.toml", "\"A\" = \"ru A\"\n\"B\" = \"ru B\"\n")
            .write("enums_en.toml", "\"C\" = \"en C\"\n");

        let en = Locale::new("en", Some("US"));
        let catalog =
            MessageCatalog::load(&dir.0, &["enums"], &[Locale::new("en", None)], ru()).unwrap();
        assert_eq!(catalog.message("C", &en), Some("en C"));
        assert_eq!(catalog.message("A", &en), Some("root A"));
        assert_eq!(catalog.message("B", &en), None);
    }

    #[test]
    fn test_first_base_name_wins() {
        let dir = BundleDir::new("order");
        dir.write("first.toml", "\"K\" = \"first\"\n")
            .write("second.toml", "\"K\" = \"second\"\n\"Only\" = \"second only\"\n");

        let catalog =
            MessageCatalog::load(&dir.0, &["first", "second"], &[], Locale::root()).unwrap();
        assert_eq!(catalog.message("K", &Locale::root()), Some("first"));
        assert_eq!(catalog.message("Only", &Locale::root()), Some("second only"));

        let reloaded = catalog.with_base_names(&["second"]).unwrap();
        assert_eq!(reloaded.message("K", &Locale::root()), Some("second"));
        assert_eq!(reloaded.base_names(), &["second".to_string()]);
    }

    #[test]
    fn test_nested_tables_are_flattened() {
        let dir = BundleDir::new("nested");
        dir.write(
            "enums.toml",
            "[\"OrderStatus\"]\nPAID = \"Оплачен\"\ncount = 3\n",
        );

        let catalog = MessageCatalog::load(&dir.0, &["enums"], &[], Locale::root()).unwrap();
        assert_eq!(
            catalog.message("OrderStatus_PAID", &Locale::root()),
            Some("Оплачен")
        );
        assert_eq!(
            catalog.message("OrderStatus_count", &Locale::root()),
            None
        );
    }

    #[test]
    fn test_missing_files_and_errors() {
        let dir = BundleDir::new("errors");
        let catalog = MessageCatalog::load(&dir.0, &["absent"], &[ru()], ru()).unwrap();
        assert_eq!(catalog.message("K", &ru()), None);

        assert!(matches!(
            MessageCatalog::load(&dir.0, &[" "], &[], ru()),
            Err(CatalogError::NoBaseNames)
        ));

        dir.write("broken.toml", "K = ");
        assert!(matches!(
            MessageCatalog::load(&dir.0, &["broken"], &[], ru()),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn test_in_memory_messages() {
        let catalog = MessageCatalog::empty(ru()).with_message(&ru(), "K", "значение");
        assert_eq!(catalog.message("K", &ru()), Some("значение"));
        assert_eq!(catalog.message("K", &Locale::root()), Some("значение"));
    }
}
