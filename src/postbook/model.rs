use serde::{Deserialize, Serialize};

/// Field schema of the data file, in column order.
///
/// The header row is always written from this constant, never inferred from
/// the records being saved, so saving an empty set still produces a
/// well-formed (header-only) file.
pub const FIELDS: [&str; 9] = [
    "id",
    "name",
    "age",
    "street",
    "city",
    "postal_code",
    "country",
    "phone",
    "email",
];

/// One customer entry.
///
/// The id is numeric and unique across the active set; every other field is
/// kept as the raw string the user supplied. `age`, `phone` and `email` are
/// constrained by the predicates in [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub age: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
    pub email: String,
}

impl Record {
    /// Field values in [`FIELDS`] order, as displayed and searched.
    pub fn field_values(&self) -> [String; 9] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.age.clone(),
            self.street.clone(),
            self.city.clone(),
            self.postal_code.clone(),
            self.country.clone(),
            self.phone.clone(),
            self.email.clone(),
        ]
    }

    /// Case-insensitive substring match against every field.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.field_values()
            .iter()
            .any(|value| value.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            id: 7,
            name: "William".into(),
            age: "30".into(),
            street: "1 High Street".into(),
            city: "Leeds".into(),
            postal_code: "LS1 4AP".into(),
            country: "UK".into(),
            phone: "01134960000".into(),
            email: "william@gmail.com".into(),
        }
    }

    #[test]
    fn keyword_matches_any_field() {
        let record = sample();
        assert!(record.matches_keyword("gmail"));
        assert!(record.matches_keyword("leeds"));
        assert!(record.matches_keyword("HIGH"));
        assert!(record.matches_keyword("7"));
        assert!(!record.matches_keyword("berlin"));
    }

    #[test]
    fn field_values_follow_schema_order() {
        let values = sample().field_values();
        assert_eq!(values.len(), FIELDS.len());
        assert_eq!(values[0], "7");
        assert_eq!(values[8], "william@gmail.com");
    }
}
