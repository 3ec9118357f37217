use std::fmt;

use super::describable::DescribableEnum;

/// Вид виджета в форме фильтра
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayType {
    Select,
    CheckBox,
    Text,
    Date,
    Hidden,
    AutoComplete,
}

impl DisplayType {
    /// Код вида виджета
    pub fn value(&self) -> i32 {
        match self {
            DisplayType::Select => 0,
            DisplayType::CheckBox => 1,
            DisplayType::Text => 2,
            DisplayType::Date => 3,
            DisplayType::Hidden => 4,
            DisplayType::AutoComplete => 5,
        }
    }

    /// Встроенное описание: имя константы в нижнем регистре
    pub fn description(&self) -> &'static str {
        match self {
            DisplayType::Select => "select",
            DisplayType::CheckBox => "check_box",
            DisplayType::Text => "text",
            DisplayType::Date => "date",
            DisplayType::Hidden => "hidden",
            DisplayType::AutoComplete => "auto_complete",
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, DisplayType::Hidden)
    }
}

impl DescribableEnum for DisplayType {
    type Code = i32;

    fn type_name() -> &'static str {
        "DisplayType"
    }

    fn variants() -> &'static [Self] {
        &[
            DisplayType::Select,
            DisplayType::CheckBox,
            DisplayType::Text,
            DisplayType::Date,
            DisplayType::Hidden,
            DisplayType::AutoComplete,
        ]
    }

    fn code(&self) -> i32 {
        self.value()
    }

    fn constant_name(&self) -> &'static str {
        match self {
            DisplayType::Select => "SELECT",
            DisplayType::CheckBox => "CHECK_BOX",
            DisplayType::Text => "TEXT",
            DisplayType::Date => "DATE",
            DisplayType::Hidden => "HIDDEN",
            DisplayType::AutoComplete => "AUTO_COMPLETE",
        }
    }
}

crate::impl_code_serde!(DisplayType, i32);

/// Выводит код, а не имя
impl fmt::Display for DisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_descriptions() {
        assert_eq!(DisplayType::from_code(4), Some(DisplayType::Hidden));
        assert_eq!(DisplayType::from_code(6), None);
        assert_eq!(DisplayType::AutoComplete.to_string(), "5");
        assert_eq!(DisplayType::CheckBox.description(), "check_box");
        assert_eq!(
            DisplayType::Hidden.description(),
            DisplayType::Hidden.constant_name().to_lowercase()
        );
    }
}
