pub mod http;
pub mod traits;
pub mod types;
pub mod workflow;

pub use http::HttpPropertyTransport;
pub use traits::PropertyTransport;
pub use types::{PropertyPayload, SubmitConfig};
pub use workflow::{SubmissionError, SubmissionWorkflow, TransmissionFailure};
