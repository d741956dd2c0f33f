use crate::commands::{helpers, CmdMessage, CmdResult, RecordDraft};
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, draft: RecordDraft) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let errors = helpers::field_errors(
        Some(&draft.age),
        Some(&draft.phone),
        Some(&draft.email),
    );
    if !errors.is_empty() {
        for error in errors {
            result.add_message(CmdMessage::error(error));
        }
        return Ok(result);
    }

    let id = helpers::next_id(store.records());
    let record = Record {
        id,
        name: draft.name,
        age: draft.age,
        street: draft.street,
        city: draft.city,
        postal_code: draft.postal_code,
        country: draft.country,
        phone: draft.phone,
        email: draft.email,
    };
    store.records_mut().push(record.clone());
    store.persist()?;

    result.add_message(CmdMessage::success(format!(
        "Record added ({}): {}",
        id, record.name
    )));
    result.affected_records.push(record);
    Ok(result)
}
