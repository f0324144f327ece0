use crate::form::FormView;
use crate::summary::Summary;
use crate::validate::ValidationError;

pub type RequestId = u64;

/// Lifecycle of the current submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
        url: String,
    },
    Succeeded {
        summary: Summary,
        /// URL the summary was generated for.
        source: String,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    input: String,
    validation_error: Option<ValidationError>,
    phase: Phase,
    last_request_id: RequestId,
    dirty: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn validation_error(&self) -> Option<ValidationError> {
        self.validation_error
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        match self.phase {
            Phase::Loading { request_id, .. } => Some(request_id),
            _ => None,
        }
    }

    pub fn view(&self) -> FormView {
        FormView::from_state(self)
    }

    /// Returns whether a redraw was pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Editing the URL dismisses any error on screen; a result stays visible.
    pub(crate) fn set_input(&mut self, input: String) {
        self.input = input;
        self.validation_error = None;
        if matches!(self.phase, Phase::Failed { .. }) {
            self.phase = Phase::Idle;
        }
        self.dirty = true;
    }

    pub(crate) fn reject(&mut self, error: ValidationError) {
        self.validation_error = Some(error);
        // Only one message is shown at a time.
        if matches!(self.phase, Phase::Failed { .. }) {
            self.phase = Phase::Idle;
        }
        self.dirty = true;
    }

    pub(crate) fn begin_request(&mut self, url: String) -> RequestId {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.validation_error = None;
        self.phase = Phase::Loading { request_id, url };
        self.dirty = true;
        request_id
    }

    pub(crate) fn settle(&mut self, outcome: crate::form::Outcome) {
        let Phase::Loading { url, .. } = &self.phase else {
            return;
        };
        let url = url.clone();
        self.phase = match outcome {
            Ok(summary) => Phase::Succeeded {
                summary,
                source: url,
            },
            Err(message) => Phase::Failed { message },
        };
        self.dirty = true;
    }

    pub(crate) fn reset(&mut self) {
        self.input.clear();
        self.validation_error = None;
        self.phase = Phase::Idle;
        self.dirty = true;
    }
}
