use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseSortFieldError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(PersonId);

/// A row of the people table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Value of a single [`Person`] attribute, as seen by comparators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Number(i64),
    Text(&'a str),
}

impl FieldValue<'_> {
    /// Textual rendering used when the two sides are not both numeric.
    pub fn to_text(&self) -> std::borrow::Cow<'_, str> {
        match self {
            FieldValue::Number(n) => std::borrow::Cow::Owned(n.to_string()),
            FieldValue::Text(s) => std::borrow::Cow::Borrowed(*s),
        }
    }
}

impl Person {
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: PersonId(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn field(&self, field: SortField) -> FieldValue<'_> {
        match field {
            SortField::Id => FieldValue::Number(self.id.0),
            SortField::FirstName => FieldValue::Text(&self.first_name),
            SortField::LastName => FieldValue::Text(&self.last_name),
            SortField::Email => FieldValue::Text(&self.email),
            SortField::Phone => FieldValue::Text(&self.phone),
        }
    }
}

/// The attributes a people table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Id,
        SortField::FirstName,
        SortField::LastName,
        SortField::Email,
        SortField::Phone,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::FirstName => "firstName",
            SortField::LastName => "lastName",
            SortField::Email => "email",
            SortField::Phone => "phone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::Id => "ID",
            SortField::FirstName => "First Name",
            SortField::LastName => "Last Name",
            SortField::Email => "Email",
            SortField::Phone => "Phone",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ParseSortFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == trimmed)
            .ok_or_else(|| ParseSortFieldError::new(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_serializes_with_camel_case_keys() {
        let person = Person::new(7, "Ada", "Lovelace", "ada@example.com", "555-010-0007");
        let json = serde_json::to_value(&person).expect("serialize");
        assert_eq!(json["id"], 7);
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
    }

    #[test]
    fn sort_field_parses_attribute_names_only() {
        assert_eq!("lastName".parse::<SortField>().expect("field"), SortField::LastName);
        assert_eq!(" email ".parse::<SortField>().expect("field"), SortField::Email);
        let err = "age".parse::<SortField>().expect_err("unknown field");
        assert_eq!(err.input(), "age");
    }

    #[test]
    fn sort_field_text_form_round_trips_through_serde() {
        for field in SortField::ALL {
            let json = serde_json::to_string(&field).expect("serialize");
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn field_accessor_exposes_id_as_number() {
        let person = Person::new(10, "A", "B", "c", "d");
        assert_eq!(person.field(SortField::Id), FieldValue::Number(10));
        assert_eq!(person.field(SortField::Phone), FieldValue::Text("d"));
        assert_eq!(FieldValue::Number(10).to_text(), "10");
    }
}
