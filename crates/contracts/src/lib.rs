//! Общие типы ядра веб-приложения: описываемые перечисления, метаданные
//! полей критериев поиска и дескрипторы виджетов формы фильтра.

pub mod domain;
pub mod enums;
pub mod shared;
