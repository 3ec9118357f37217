pub mod config;
pub mod i18n;
pub mod json;
pub mod logger;
pub mod search_filter;
