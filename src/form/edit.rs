use crate::models::{FormSnapshot, ScalarField, AMENITIES_KEY};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Current value of the control that fired a change event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlValue {
    /// Text inputs and selects
    Text(String),
    /// Checkboxes
    Checked(bool),
}

/// A single user edit against the listing form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormEdit {
    Scalar { field: String, value: String },
    Amenity { key: String, selected: bool },
}

impl FormEdit {
    pub fn scalar(field: impl Into<String>, value: impl Into<String>) -> Self {
        FormEdit::Scalar {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn amenity(key: impl Into<String>, selected: bool) -> Self {
        FormEdit::Amenity {
            key: key.into(),
            selected,
        }
    }

    /// Build an edit from a raw change event. Checkboxes toggle amenities,
    /// everything else writes a scalar.
    pub fn from_control(field_id: impl Into<String>, value: ControlValue) -> Self {
        match value {
            ControlValue::Checked(selected) => FormEdit::amenity(field_id, selected),
            ControlValue::Text(text) => FormEdit::scalar(field_id, text),
        }
    }
}

/// Apply `edit` to `snapshot`, returning the next snapshot.
///
/// The input is never modified. Unknown scalar identifiers are kept in
/// [`FormSnapshot::extra`] rather than rejected; a scalar write to the
/// amenities key is dropped since amenities only change through toggles.
pub fn apply_edit(snapshot: &FormSnapshot, edit: FormEdit) -> FormSnapshot {
    let mut next = snapshot.clone();

    match edit {
        FormEdit::Scalar { field, value } => match field.parse::<ScalarField>() {
            Ok(known) => *next.slot_mut(known) = value,
            Err(()) if field == AMENITIES_KEY => {
                debug!("Ignoring text edit to '{}'", field);
            }
            Err(()) => {
                debug!("Accepting unknown form field '{}'", field);
                next.extra.insert(field, value);
            }
        },
        FormEdit::Amenity { key, selected } => {
            next.amenities.insert(key, selected);
        }
    }

    next
}
