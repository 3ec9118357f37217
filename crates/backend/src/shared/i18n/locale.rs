use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Локаль вида `language[_COUNTRY]`; пустой язык означает корневой бандл
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Locale {
    language: String,
    country: Option<String>,
}

impl Locale {
    pub fn new(language: &str, country: Option<&str>) -> Self {
        Self {
            language: language.trim().to_lowercase(),
            country: country
                .map(|c| c.trim().to_uppercase())
                .filter(|c| !c.is_empty()),
        }
    }

    /// Корневая локаль (бандл без суффикса)
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.language.is_empty()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Суффикс имени бандла: "ru_RU", "ru" или "" для корня
    pub fn tag(&self) -> String {
        match &self.country {
            Some(country) if !self.language.is_empty() => {
                format!("{}_{}", self.language, country)
            }
            _ => self.language.clone(),
        }
    }

    /// Цепочка поиска: ru_RU -> ru -> корень
    pub fn fallback_chain(&self) -> Vec<Locale> {
        let mut chain = Vec::with_capacity(3);
        if self.country.is_some() && !self.is_root() {
            chain.push(self.clone());
        }
        if !self.is_root() {
            chain.push(Locale::new(&self.language, None));
        }
        chain.push(Locale::root());
        chain
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Принимает "ru", "ru_RU", "ru-RU"; пустая строка даёт корневую локаль
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Locale::root());
        }
        let mut parts = s.splitn(2, ['_', '-']);
        let language = parts.next().unwrap_or_default();
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("Invalid locale: {}", s));
        }
        let country = parts.next();
        if let Some(country) = country {
            if country.is_empty() || !country.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(format!("Invalid locale: {}", s));
            }
        }
        Ok(Locale::new(language, country))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
