use crate::form::{Effect, FormState, Msg};
use crate::validate::validate;
use log::{debug, info};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(input) => {
            // The field is disabled while a request is in flight.
            if !state.is_loading() {
                state.set_input(input);
            }
            Vec::new()
        }
        Msg::Submitted => {
            if state.is_loading() {
                debug!("submit ignored: request already in flight");
                return (state, Vec::new());
            }
            match validate(state.input()) {
                Ok(url) => {
                    let request_id = state.begin_request(url.clone());
                    info!("submitting request_id={} url={}", request_id, url);
                    vec![Effect::StartRequest { request_id, url }]
                }
                Err(err) => {
                    debug!("submit rejected: {}", err);
                    state.reject(err);
                    Vec::new()
                }
            }
        }
        Msg::Settled {
            request_id,
            outcome,
        } => {
            if state.in_flight() == Some(request_id) {
                state.settle(outcome);
            } else {
                debug!("discarding stale settlement request_id={}", request_id);
            }
            Vec::new()
        }
        Msg::ResetClicked => {
            let in_flight = state.in_flight();
            state.reset();
            in_flight
                .map(|request_id| vec![Effect::CancelRequest { request_id }])
                .unwrap_or_default()
        }
    };

    (state, effects)
}
