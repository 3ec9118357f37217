//! Фильтр формы поиска
//!
//! Строит дескрипторы виджетов по объекту критериев и собирает обратно
//! query string из текущих значений.

mod filter;
mod query;

pub use filter::{default_display_type, FilterError, SearchFilter};
pub use query::{append_query_string, build_query_string};
