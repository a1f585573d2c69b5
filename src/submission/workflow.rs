use crate::models::{Alert, CurrentUser, FormSnapshot, ScalarField};
use crate::submission::traits::PropertyTransport;
use crate::submission::types::PropertyPayload;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, error, info};

/// Why the remote side did not accept a listing
#[derive(Debug, Error)]
pub enum TransmissionFailure {
    #[error("properties API answered {status}")]
    Rejected { status: StatusCode },

    #[error("request did not complete: {0:#}")]
    Network(#[source] anyhow::Error),

    #[error("could not encode listing: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Everything that can stop a listing from being saved.
/// The display text is what the user sees.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("must be authenticated")]
    Unauthenticated,

    #[error("field {field} is required")]
    MissingRequiredField { field: ScalarField },

    #[error("failed to save property")]
    TransmissionFailure(#[from] TransmissionFailure),
}

impl From<&SubmissionError> for Alert {
    fn from(err: &SubmissionError) -> Self {
        Alert::error(err.to_string())
    }
}

pub const SAVED_MESSAGE: &str = "property saved successfully";

/// Stages of one submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Validating,
    Sending,
    Succeeded,
    RejectedLocally,
    RejectedRemotely,
}

/// First required field left empty, in form order. `"0"` counts as filled.
pub fn first_missing_field(snapshot: &FormSnapshot) -> Option<ScalarField> {
    ScalarField::ALL
        .into_iter()
        .find(|field| snapshot.get(*field).is_empty())
}

/// Gate, validate, send and report a listing
pub struct SubmissionWorkflow<T> {
    transport: T,
}

impl<T: PropertyTransport> SubmissionWorkflow<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submit `snapshot` on behalf of `user` and turn the outcome into the
    /// alert to display. Never fails; every error becomes an error alert.
    pub async fn submit(&self, snapshot: &FormSnapshot, user: Option<&CurrentUser>) -> Alert {
        match self.try_submit(snapshot, user).await {
            Ok(()) => Alert::success(SAVED_MESSAGE),
            Err(err) => Alert::from(&err),
        }
    }

    /// Same steps as [`submit`](Self::submit) but keeps the typed error.
    /// At most one request is sent, and only once both local checks pass.
    pub async fn try_submit(
        &self,
        snapshot: &FormSnapshot,
        user: Option<&CurrentUser>,
    ) -> Result<(), SubmissionError> {
        let user = user.ok_or_else(|| {
            debug!(phase = ?SubmissionPhase::RejectedLocally, "No signed-in user");
            SubmissionError::Unauthenticated
        })?;

        debug!(phase = ?SubmissionPhase::Validating, user_id = %user.id);
        if let Some(field) = first_missing_field(snapshot) {
            debug!(phase = ?SubmissionPhase::RejectedLocally, %field, "Required field empty");
            return Err(SubmissionError::MissingRequiredField { field });
        }

        let outcome = match PropertyPayload::new(&user.id, snapshot) {
            Ok(payload) => {
                debug!(
                    phase = ?SubmissionPhase::Sending,
                    transport = self.transport.transport_name()
                );
                match self.transport.post_property(&payload).await {
                    Ok(status) if status.is_success() => Ok(()),
                    Ok(status) => Err(TransmissionFailure::Rejected { status }),
                    Err(cause) => Err(TransmissionFailure::Network(cause)),
                }
            }
            Err(err) => Err(TransmissionFailure::from(err)),
        };

        match outcome {
            Ok(()) => {
                info!(phase = ?SubmissionPhase::Succeeded, user_id = %user.id, "Property saved");
                Ok(())
            }
            Err(failure) => {
                error!(phase = ?SubmissionPhase::RejectedRemotely, "Failed to save property: {}", failure);
                Err(failure.into())
            }
        }
    }
}
