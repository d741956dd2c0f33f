use crate::model::Record;
use crate::validate::{valid_age, valid_email, valid_phone};

/// First record whose id matches, if any. Linear scan; the active set is
/// small by design.
pub fn find(records: &[Record], id: u32) -> Option<&Record> {
    records.iter().find(|record| record.id == id)
}

pub fn find_index(records: &[Record], id: u32) -> Option<usize> {
    records.iter().position(|record| record.id == id)
}

/// Next free id: one past the greatest id in use, 1 for an empty set.
pub fn next_id(records: &[Record]) -> u32 {
    records
        .iter()
        .map(|record| record.id)
        .max()
        .map_or(1, |max| max + 1)
}

/// Validation messages for the constrained fields. Fields passed as `None`
/// are not being changed and are not checked.
pub fn field_errors(
    age: Option<&str>,
    phone: Option<&str>,
    email: Option<&str>,
) -> Vec<String> {
    let mut errors = Vec::new();
    if let Some(age) = age {
        if !valid_age(age) {
            errors.push("Age must be a positive integer between 1 and 120.".to_string());
        }
    }
    if let Some(phone) = phone {
        if !valid_phone(phone) {
            errors.push("Phone must contain only digits and be at least 10 digits long.".to_string());
        }
    }
    if let Some(email) = email {
        if !valid_email(email) {
            errors.push("Email must contain '@' and '.'.".to_string());
        }
    }
    errors
}
