use crate::commands::{helpers, CmdMessage, CmdResult, RecordPatch};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: u32, patch: &RecordPatch) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let index = match helpers::find_index(store.records(), id) {
        Some(index) => index,
        None => {
            tracing::warn!("record not found for amend: id {id}");
            result.add_message(CmdMessage::warning(format!("Record not found: {}", id)));
            return Ok(result);
        }
    };

    if patch.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to amend for record {}",
            id
        )));
        return Ok(result);
    }

    let errors = helpers::field_errors(
        patch.age.as_deref(),
        patch.phone.as_deref(),
        patch.email.as_deref(),
    );
    if !errors.is_empty() {
        for error in errors {
            result.add_message(CmdMessage::error(error));
        }
        return Ok(result);
    }

    let record = &mut store.records_mut()[index];
    if let Some(name) = &patch.name {
        record.name = name.clone();
    }
    if let Some(age) = &patch.age {
        record.age = age.clone();
    }
    if let Some(street) = &patch.street {
        record.street = street.clone();
    }
    if let Some(city) = &patch.city {
        record.city = city.clone();
    }
    if let Some(postal_code) = &patch.postal_code {
        record.postal_code = postal_code.clone();
    }
    if let Some(country) = &patch.country {
        record.country = country.clone();
    }
    if let Some(phone) = &patch.phone {
        record.phone = phone.clone();
    }
    if let Some(email) = &patch.email {
        record.email = email.clone();
    }
    let record = record.clone();
    store.persist()?;

    result.add_message(CmdMessage::success(format!(
        "Record amended ({}): {}",
        id, record.name
    )));
    result.affected_records.push(record);
    Ok(result)
}
