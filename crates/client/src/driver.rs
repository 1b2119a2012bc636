//! Glue between the wizard and the backend.

use ecoobra_core::Feedback;
use ecoobra_forms::{NextOutcome, PageValues, Wizard};

use crate::api::ApiClient;

/// What the view should do after a forward step.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverOutcome {
    /// Show the page at this index.
    Advanced(usize),
    /// The form was saved; leave the wizard.
    Submitted(Feedback),
    /// Stay on the current page and show the message. Nothing was saved.
    Blocked(Feedback),
}

/// Step the wizard forward, posting the payload when the last page completes.
///
/// A precondition failure or a failed request both leave the wizard editing
/// with its state intact; only a confirmed save clears it.
pub async fn advance_wizard(
    client: &ApiClient,
    wizard: &mut Wizard,
    values: PageValues,
) -> DriverOutcome {
    let form = match wizard.next(values) {
        Ok(NextOutcome::Advanced(index)) => return DriverOutcome::Advanced(index),
        Ok(NextOutcome::Submit(form)) => form,
        Err(blocked) => return DriverOutcome::Blocked(Feedback::validation(blocked.to_string())),
    };

    match client.submit_inspection(&form).await {
        Ok(()) => {
            wizard.complete();
            DriverOutcome::Submitted(Feedback::success("Formulario enviado exitosamente"))
        }
        Err(err) => {
            tracing::error!(error = %err, "inspection form submission failed");
            wizard.submission_failed();
            DriverOutcome::Blocked(err.to_feedback())
        }
    }
}
