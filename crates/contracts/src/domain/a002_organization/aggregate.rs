use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AutoCompleteObject, ModelObject};

/// Организация
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: Uuid,
    /// Бизнес-код (например, "ORG-001")
    pub code: String,
    /// Наименование
    pub description: String,
    pub inn: String,
}

impl Organization {
    pub fn new(code: String, description: String, inn: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            description,
            inn,
        }
    }
}

crate::impl_json_patch!(Organization { id, code, description, inn });

impl ModelObject for Organization {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl AutoCompleteObject for Organization {
    fn auto_complete_label(&self) -> String {
        format!("{} ({})", self.description, self.inn)
    }
}
