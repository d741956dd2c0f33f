use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: u32) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let index = match helpers::find_index(store.records(), id) {
        Some(index) => index,
        None => {
            tracing::warn!("record not found for delete: id {id}");
            result.add_message(CmdMessage::warning(format!("Record not found: {}", id)));
            return Ok(result);
        }
    };

    let record = store.records_mut().remove(index);
    store.persist()?;

    result.add_message(CmdMessage::success(format!(
        "Record deleted ({}): {}",
        id, record.name
    )));
    result.affected_records.push(record);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, RecordDraft};
    use crate::store::memory::InMemoryStore;

    fn draft(name: &str) -> RecordDraft {
        RecordDraft {
            name: name.into(),
            age: "30".into(),
            street: String::new(),
            city: String::new(),
            postal_code: String::new(),
            country: String::new(),
            phone: "01134960000".into(),
            email: "a@b.c".into(),
        }
    }

    #[test]
    fn removes_record_and_persists() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, draft("William")).unwrap();

        run(&mut store, 1).unwrap();

        assert!(helpers::find(store.records(), 1).is_none());
        assert!(store.persisted().is_empty());
    }

    #[test]
    fn removes_only_the_matching_record() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, draft("William")).unwrap();
        add::run(&mut store, draft("Ada")).unwrap();

        run(&mut store, 1).unwrap();

        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].name, "Ada");
    }

    #[test]
    fn not_found_leaves_state_untouched() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, draft("William")).unwrap();
        let persists_before = store.persist_count();

        let result = run(&mut store, 9999).unwrap();

        assert!(result.affected_records.is_empty());
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.persist_count(), persists_before);
    }
}
