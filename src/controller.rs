//! Submission driver: owns the form state and executes its effects.
//!
//! Each `StartRequest` runs on its own tokio task and reports back through a
//! channel as `Msg::Settled`. At most one task is alive at a time.

use crate::form::{update, Effect, FormState, Msg, RequestId};
use crate::webhook::Summarizer;
use log::{info, warn};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct Controller {
    state: FormState,
    summarizer: Arc<dyn Summarizer>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    in_flight: Option<(RequestId, JoinHandle<()>)>,
}

impl Controller {
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        Self {
            state: FormState::new(),
            summarizer,
            msg_tx,
            msg_rx,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    /// Apply a message and run the resulting effects.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.run(effect);
        }
        // Settled tasks have already finished; detach their handles.
        if self.state.in_flight().is_none() {
            self.in_flight = None;
        }
    }

    /// Dispatch every settlement that has already arrived.
    ///
    /// Returns true if anything was processed.
    pub fn pump(&mut self) -> bool {
        let mut processed = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
            processed = true;
        }
        processed
    }

    /// Wait for the next settlement and dispatch it.
    pub async fn next_settlement(&mut self) {
        if let Some(msg) = self.msg_rx.recv().await {
            self.dispatch(msg);
        }
    }

    /// Abort any in-flight request, e.g. before quitting.
    pub fn shutdown(&mut self) {
        if let Some((request_id, handle)) = self.in_flight.take() {
            info!("aborting request_id={} on shutdown", request_id);
            handle.abort();
        }
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::StartRequest { request_id, url } => {
                let summarizer = Arc::clone(&self.summarizer);
                let msg_tx = self.msg_tx.clone();
                let handle = tokio::spawn(async move {
                    let outcome = match summarizer.summarize(&url).await {
                        Ok(summary) => {
                            info!("request_id={} succeeded", request_id);
                            Ok(summary)
                        }
                        Err(err) => {
                            warn!(
                                "request_id={} failed kind={} error={:?}",
                                request_id,
                                err.kind(),
                                err
                            );
                            Err(err.to_string())
                        }
                    };
                    let _ = msg_tx.send(Msg::Settled {
                        request_id,
                        outcome,
                    });
                });
                if let Some((previous, stale)) = self.in_flight.replace((request_id, handle)) {
                    warn!("request_id={} replaced while in flight", previous);
                    stale.abort();
                }
            }
            Effect::CancelRequest { request_id } => {
                if let Some((current, handle)) = self.in_flight.take() {
                    if current == request_id {
                        info!("cancelled request_id={}", request_id);
                        handle.abort();
                    } else {
                        self.in_flight = Some((current, handle));
                    }
                }
            }
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.shutdown();
    }
}
