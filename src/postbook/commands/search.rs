use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;

/// Keyword search across every field of every record. Matches keep file
/// order; nothing is persisted.
pub fn run<S: DataStore>(store: &S, term: &str) -> Result<CmdResult> {
    let matches: Vec<Record> = store
        .records()
        .iter()
        .filter(|record| record.matches_keyword(term))
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed_records(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, RecordDraft};
    use crate::store::memory::InMemoryStore;

    fn seeded_store() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for (name, city, email) in [
            ("William", "Leeds", "william@gmail.com"),
            ("Ada", "London", "ada@example.org"),
            ("Grace", "Leeds", "grace@gmail.com"),
        ] {
            add::run(
                &mut store,
                RecordDraft {
                    name: name.into(),
                    age: "30".into(),
                    street: "1 High Street".into(),
                    city: city.into(),
                    postal_code: "LS1 4AP".into(),
                    country: "UK".into(),
                    phone: "01134960000".into(),
                    email: email.into(),
                },
            )
            .unwrap();
        }
        store
    }

    #[test]
    fn matches_any_field_case_insensitively() {
        let store = seeded_store();

        let result = run(&store, "GMAIL").unwrap();
        let names: Vec<_> = result.listed_records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["William", "Grace"]);

        let result = run(&store, "london").unwrap();
        assert_eq!(result.listed_records[0].name, "Ada");
    }

    #[test]
    fn no_match_yields_empty_list() {
        let store = seeded_store();
        let result = run(&store, "berlin").unwrap();
        assert!(result.listed_records.is_empty());
    }

    #[test]
    fn does_not_persist() {
        let store = seeded_store();
        let persists_before = store.persist_count();
        run(&store, "gmail").unwrap();
        assert_eq!(store.persist_count(), persists_before);
    }
}
