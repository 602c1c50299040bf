//! # Domain models for user records
//!
//! Defines the record type held by [`crate::RecordManager`] and the two input
//! shapes used to create and edit it.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserRecord`] | One persisted entry: a numeric `id` assigned by the manager plus full name, address and phone number. Serialised with camelCase keys so the stored JSON reads `{"id":1,"fullName":..,"address":..,"phoneNumber":..}`. |
//! | [`RecordDraft`] | The three text fields of a record that does not exist yet. Input to [`crate::RecordManager::add`]. |
//! | [`RecordPatch`] | A partial overwrite. `None` fields are left untouched by [`crate::RecordManager::update`]. |
//!
//! No field is validated: empty strings are valid values everywhere.

use serde::{Deserialize, Serialize};

/// A user entry in the record list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique, positive, assigned as max existing id + 1
    pub id: u64,
    pub full_name: String,
    pub address: String,
    pub phone_number: String,
}

/// Fields of a record that has not been assigned an id yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub full_name: String,
    pub address: String,
    pub phone_number: String,
}

impl RecordDraft {
    pub fn new(
        full_name: impl Into<String>,
        address: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            address: address.into(),
            phone_number: phone_number.into(),
        }
    }

    pub(crate) fn into_record(self, id: u64) -> UserRecord {
        UserRecord {
            id,
            full_name: self.full_name,
            address: self.address,
            phone_number: self.phone_number,
        }
    }
}

/// Partial update of a record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl RecordPatch {
    /// A patch overwriting all three fields, as the inline row editor submits.
    pub fn from_draft(draft: RecordDraft) -> Self {
        Self {
            full_name: Some(draft.full_name),
            address: Some(draft.address),
            phone_number: Some(draft.phone_number),
        }
    }

    pub fn full_name(mut self, value: impl Into<String>) -> Self {
        self.full_name = Some(value.into());
        self
    }

    pub fn address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(value.into());
        self
    }

    pub fn phone_number(mut self, value: impl Into<String>) -> Self {
        self.phone_number = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.address.is_none() && self.phone_number.is_none()
    }

    pub(crate) fn apply(self, record: &mut UserRecord) {
        if let Some(v) = self.full_name {
            record.full_name = v;
        }
        if let Some(v) = self.address {
            record.address = v;
        }
        if let Some(v) = self.phone_number {
            record.phone_number = v;
        }
    }
}

impl From<&UserRecord> for RecordDraft {
    fn from(record: &UserRecord) -> Self {
        Self {
            full_name: record.full_name.clone(),
            address: record.address.clone(),
            phone_number: record.phone_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_camel_case_keys() {
        let record = RecordDraft::new("Anna", "Main St 1", "555-0100").into_record(3);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"id":3,"fullName":"Anna","address":"Main St 1","phoneNumber":"555-0100"}"#
        );
    }

    #[test]
    fn test_patch_only_touches_given_fields() {
        let mut record = RecordDraft::new("Anna", "Main St 1", "555-0100").into_record(1);
        RecordPatch::default().address("Elm St 2").apply(&mut record);

        assert_eq!(record.full_name, "Anna");
        assert_eq!(record.address, "Elm St 2");
        assert_eq!(record.phone_number, "555-0100");
    }

    #[test]
    fn test_empty_patch() {
        assert!(RecordPatch::default().is_empty());
        assert!(!RecordPatch::default().full_name("").is_empty());
    }
}
