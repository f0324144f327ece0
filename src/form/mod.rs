//! Form controller: pure state machine and view-model helpers.
//!
//! `update` never performs I/O. Requests and cancellations come back out as
//! [`Effect`]s for the driver in [`crate::controller`] to execute.

mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, Outcome};
pub use state::{FormState, Phase, RequestId};
pub use update::update;
pub use view_model::{FormView, StatusView, SUBMIT_LABEL, SUBMIT_LABEL_LOADING};
