use std::collections::HashMap;

use contracts::domain::a002_organization::aggregate::Organization;
use contracts::domain::common::{AutoCompleteObject, ModelResolver};
use uuid::Uuid;

/// Хранилище организаций в памяти
///
/// Заполняется один раз на старте и дальше только читается.
#[derive(Debug, Default)]
pub struct OrganizationRepository {
    items: Vec<Organization>,
    by_id: HashMap<Uuid, usize>,
}

impl OrganizationRepository {
    pub fn new(items: Vec<Organization>) -> Self {
        let by_id = items
            .iter()
            .enumerate()
            .map(|(idx, org)| (org.id, idx))
            .collect();
        Self { items, by_id }
    }

    /// Демонстрационные данные
    pub fn with_demo_data() -> Self {
        let data = [
            ("ORG-001", "ООО \"Рога и Копыта\"", "7701234567"),
            ("ORG-002", "ИП Иванов И.И.", "500100732259"),
            ("ORG-003", "АО \"Северный склад\"", "7812345678"),
        ];
        let items = data
            .into_iter()
            .map(|(code, description, inn)| {
                Organization::new(code.to_string(), description.to_string(), inn.to_string())
            })
            .collect();
        Self::new(items)
    }

    pub fn list_all(&self) -> &[Organization] {
        &self.items
    }

    pub fn get_by_id(&self, id: Uuid) -> Option<&Organization> {
        self.by_id.get(&id).map(|&idx| &self.items[idx])
    }

    /// Поиск для autocomplete: по коду, наименованию или ИНН, без учёта регистра
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Organization> {
        let query = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|org| {
                query.is_empty()
                    || org.code.to_lowercase().contains(&query)
                    || org.description.to_lowercase().contains(&query)
                    || org.inn.contains(&query)
            })
            .take(limit)
            .collect()
    }

    /// Пары `id` / подпись для списка подсказок
    pub fn auto_complete(&self, query: &str, limit: usize) -> Vec<(Uuid, String)> {
        self.search(query, limit)
            .into_iter()
            .map(|org| (org.id, org.auto_complete_label()))
            .collect()
    }
}

impl ModelResolver<Organization> for OrganizationRepository {
    fn find_by_id(&self, id: &Uuid) -> Option<Organization> {
        self.get_by_id(*id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::ModelRef;

    #[test]
    fn test_search() {
        let repo = OrganizationRepository::with_demo_data();
        assert_eq!(repo.search("", 10).len(), 3);
        assert_eq!(repo.search("", 2).len(), 2);

        let found = repo.search("рога", 10);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "ORG-001");

        assert_eq!(repo.search("7812", 10)[0].code, "ORG-003");
        assert!(repo.search("нет такой", 10).is_empty());
    }

    #[test]
    fn test_auto_complete_labels() {
        let repo = OrganizationRepository::with_demo_data();
        let items = repo.auto_complete("org-002", 10);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].1, "ИП Иванов И.И. (500100732259)");
    }

    #[test]
    fn test_resolves_model_ref() {
        let repo = OrganizationRepository::with_demo_data();
        let id = repo.list_all()[1].id;

        let mut reference: ModelRef<Organization> = ModelRef::Unresolved(id);
        let resolved = reference.resolve(&repo).map(|org| org.code.clone());
        assert_eq!(resolved.as_deref(), Some("ORG-002"));
        assert!(reference.is_loaded());

        let mut missing: ModelRef<Organization> = ModelRef::Unresolved(Uuid::new_v4());
        assert!(missing.resolve(&repo).is_none());
        assert!(!missing.is_loaded());
    }
}
