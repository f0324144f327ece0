//! # Linksumma
//!
//! A TUI form that sends a URL to a summarization webhook and shows the
//! summary it returns.
//!
//! ## Features
//!
//! - **Validated input**: only absolute `http`/`https` URLs are submitted
//! - **Single in-flight request**: bounded by a client-side timeout and cancelled on reset
//! - **Distinct failures**: server, application, empty, timeout and network errors each get their own message
//! - **Pluggable backend**: the webhook sits behind the `Summarizer` trait

pub mod config;
pub mod controller;
pub mod form;
pub mod logging;
pub mod summary;
pub mod ui;
pub mod validate;
pub mod webhook;

pub use config::Config;
pub use controller::Controller;
pub use summary::Summary;
pub use webhook::{Summarizer, WebhookClient, WebhookError, WebhookSettings};
