use crate::form::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the URL to the summarization webhook.
    StartRequest { request_id: RequestId, url: String },
    /// Abort the request if it has not settled yet.
    CancelRequest { request_id: RequestId },
}
