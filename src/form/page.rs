use crate::form::edit::{apply_edit, ControlValue, FormEdit};
use crate::models::{Alert, CurrentUser, FormSnapshot};
use crate::submission::{PropertyTransport, SubmissionWorkflow};
use tracing::warn;

/// Whether a submission is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
}

/// The add-property page: current snapshot, last alert and submit status.
#[derive(Debug, Default)]
pub struct ListingFormPage {
    snapshot: FormSnapshot,
    alert: Option<Alert>,
    status: SubmissionStatus,
}

impl ListingFormPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn handle_edit(&mut self, edit: FormEdit) {
        self.snapshot = apply_edit(&self.snapshot, edit);
    }

    /// Change event straight from a control
    pub fn handle_change(&mut self, field_id: &str, value: ControlValue) {
        self.handle_edit(FormEdit::from_control(field_id, value));
    }

    /// Submit the current snapshot. The new alert replaces any previous one.
    /// Returns `None` without doing anything if a submission is already running.
    pub async fn handle_submit<T: PropertyTransport>(
        &mut self,
        workflow: &SubmissionWorkflow<T>,
        user: Option<&CurrentUser>,
    ) -> Option<&Alert> {
        if self.status == SubmissionStatus::Sending {
            warn!("Submission already in progress");
            return None;
        }

        self.status = SubmissionStatus::Sending;
        let alert = workflow.submit(&self.snapshot, user).await;
        self.status = SubmissionStatus::Idle;

        self.alert = Some(alert);
        self.alert.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlertKind, ScalarField};
    use crate::submission::workflow::tests::RecordingTransport;
    use reqwest::StatusCode;

    fn fill(page: &mut ListingFormPage) {
        for field in ScalarField::ALL {
            if page.snapshot().get(field).is_empty() {
                page.handle_change(field.as_str(), ControlValue::Text("x".to_string()));
            }
        }
    }

    #[tokio::test]
    async fn test_new_alert_replaces_old_one() {
        let workflow = SubmissionWorkflow::new(RecordingTransport::answering(StatusCode::OK));
        let user = CurrentUser::new("u1");
        let mut page = ListingFormPage::new();

        let alert = page.handle_submit(&workflow, Some(&user)).await.cloned();
        assert_eq!(alert.map(|a| a.kind), Some(AlertKind::Error));

        fill(&mut page);
        page.handle_change("pool", ControlValue::Checked(true));
        page.handle_submit(&workflow, Some(&user)).await;

        assert_eq!(page.alert(), Some(&Alert::success("property saved successfully")));
        assert_eq!(page.status(), SubmissionStatus::Idle);
        assert_eq!(workflow.transport().calls(), 1);
    }

    #[tokio::test]
    async fn test_submit_refused_while_sending() {
        let workflow = SubmissionWorkflow::new(RecordingTransport::answering(StatusCode::OK));
        let mut page = ListingFormPage::new();
        fill(&mut page);
        page.status = SubmissionStatus::Sending;

        let outcome = page
            .handle_submit(&workflow, Some(&CurrentUser::new("u1")))
            .await;

        assert!(outcome.is_none());
        assert!(page.alert().is_none());
        assert_eq!(workflow.transport().calls(), 0);
    }

    #[test]
    fn test_change_events_update_snapshot() {
        let mut page = ListingFormPage::new();
        page.handle_change("city", ControlValue::Text("Cusco".to_string()));
        page.handle_change("gym", ControlValue::Checked(true));

        assert_eq!(page.snapshot().city, "Cusco");
        assert!(page.snapshot().amenity("gym"));
    }
}
