use crate::form::{FormState, Phase};
use crate::validate::is_valid_url;

pub const SUBMIT_LABEL: &str = "Generate Summary";
pub const SUBMIT_LABEL_LOADING: &str = "Processing...";

/// What the lower panel of the form shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusView {
    #[default]
    Idle,
    Loading,
    Result {
        title: String,
        summary: String,
        source: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    pub input: String,
    pub input_enabled: bool,
    /// Show the check mark next to the URL field.
    pub input_valid: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub show_reset: bool,
    /// The single error message on screen, if any.
    pub error: Option<String>,
    pub status: StatusView,
}

impl FormView {
    pub(crate) fn from_state(state: &FormState) -> Self {
        let loading = state.is_loading();
        let input = state.input().to_string();

        let submission_error = match state.phase() {
            Phase::Failed { message } => Some(message.clone()),
            _ => None,
        };
        let error = state
            .validation_error()
            .map(|err| err.to_string())
            .or(submission_error);

        let status = match state.phase() {
            Phase::Loading { .. } => StatusView::Loading,
            Phase::Succeeded { summary, source } => StatusView::Result {
                title: summary.title.clone(),
                summary: summary.summary.clone(),
                source: source.clone(),
            },
            Phase::Idle | Phase::Failed { .. } => StatusView::Idle,
        };

        Self {
            input_enabled: !loading,
            input_valid: !loading && is_valid_url(input.trim()),
            submit_enabled: !loading && !input.trim().is_empty(),
            submit_label: if loading {
                SUBMIT_LABEL_LOADING
            } else {
                SUBMIT_LABEL
            },
            show_reset: !loading
                && (error.is_some() || matches!(state.phase(), Phase::Succeeded { .. })),
            error,
            status,
            input,
        }
    }
}
