use crate::form::RequestId;
use crate::summary::Summary;

/// Settled result of one request; failures carry the user-facing message.
pub type Outcome = Result<Summary, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL field.
    InputChanged(String),
    /// User pressed the submit control.
    Submitted,
    /// A request finished, failed or timed out.
    Settled {
        request_id: RequestId,
        outcome: Outcome,
    },
    /// User pressed "New".
    ResetClicked,
}
