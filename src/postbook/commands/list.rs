use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_records(store.records().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, RecordDraft};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_records_in_insertion_order() {
        let mut store = InMemoryStore::new();
        for name in ["William", "Ada", "Grace"] {
            add::run(
                &mut store,
                RecordDraft {
                    name: name.into(),
                    age: "30".into(),
                    street: String::new(),
                    city: String::new(),
                    postal_code: String::new(),
                    country: String::new(),
                    phone: "01134960000".into(),
                    email: "a@b.c".into(),
                },
            )
            .unwrap();
        }

        let result = run(&store).unwrap();
        let names: Vec<_> = result.listed_records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["William", "Ada", "Grace"]);
    }
}
