use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: u32) -> Result<CmdResult> {
    match helpers::find(store.records(), id) {
        Some(record) => Ok(CmdResult::default().with_listed_records(vec![record.clone()])),
        None => {
            tracing::warn!("record not found for display: id {id}");
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!("Record not found: {}", id)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, RecordDraft};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_the_matching_record() {
        let mut store = InMemoryStore::new();
        add::run(
            &mut store,
            RecordDraft {
                name: "William".into(),
                age: "30".into(),
                street: String::new(),
                city: String::new(),
                postal_code: String::new(),
                country: String::new(),
                phone: "01134960000".into(),
                email: "w@gmail.com".into(),
            },
        )
        .unwrap();

        let result = run(&store, 1).unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].name, "William");
    }

    #[test]
    fn missing_id_warns_instead_of_failing() {
        let store = InMemoryStore::new();
        let result = run(&store, 42).unwrap();
        assert!(result.listed_records.is_empty());
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
    }
}
