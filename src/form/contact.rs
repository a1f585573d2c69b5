use crate::models::ContactSnapshot;
use tracing::debug;

/// Presentational state for one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub read_only: bool,
}

/// Email / phone pair on the profile page.
///
/// Editability is owned by the caller; this type only honours it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactFieldPair {
    is_editing: bool,
}

impl ContactFieldPair {
    pub fn new(is_editing: bool) -> Self {
        Self { is_editing }
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn fields(&self, contact: &ContactSnapshot) -> [FieldView; 2] {
        [
            FieldView {
                id: "email",
                label: "Correo Electrónico",
                placeholder: "micorreo@gmail.com",
                value: contact.email.clone(),
                read_only: !self.is_editing,
            },
            FieldView {
                id: "phoneNumber",
                label: "Número Telefónico",
                placeholder: "+51 987 654 321",
                value: contact.phone_number.clone(),
                read_only: !self.is_editing,
            },
        ]
    }

    /// Same contract as the listing form's scalar edits, restricted to the
    /// two contact fields. Read-only pairs hand back an unchanged copy.
    pub fn apply_edit(
        &self,
        contact: &ContactSnapshot,
        field_id: &str,
        value: impl Into<String>,
    ) -> ContactSnapshot {
        let mut next = contact.clone();
        if !self.is_editing {
            debug!("Ignoring edit to '{}' while contact info is read-only", field_id);
            return next;
        }

        match field_id {
            "email" => next.email = value.into(),
            "phoneNumber" => next.phone_number = value.into(),
            other => debug!("Ignoring edit to unknown contact field '{}'", other),
        }

        next
    }
}
