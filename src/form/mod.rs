pub mod contact;
pub mod edit;
pub mod page;

pub use contact::{ContactFieldPair, FieldView};
pub use edit::{apply_edit, ControlValue, FormEdit};
pub use page::{ListingFormPage, SubmissionStatus};
