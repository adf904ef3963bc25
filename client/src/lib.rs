//! Client side of the Boost KYC verification backend.
//!
//! - [`BackendClient`] creates sessions and polls for full results until the
//!   backend stops reporting `"in_progress"` anywhere in the document.
//! - [`HttpTransport`] is the `reqwest`-backed transport used outside tests.
//! - [`Verifier`] strings the backend and an external verification
//!   capability together into the sync and async flows.
//! - [`log_capture_events`] logs intermediate captures published by a
//!   capability.

pub mod backend;
pub mod capture_log;
pub mod config;
pub mod error;
pub mod flow;
pub mod http;
pub mod json;
pub mod progress;
pub mod tracing_spans;

pub use backend::{result_document, BackendClient, CREATE_SESSION_PATH, FULL_RESULTS_PATH};
pub use capture_log::{log_capture_events, spawn_capture_logger};
pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL};
pub use error::{BackendError, FlowError};
pub use flow::{FlowOutcome, VerificationReport, Verifier};
pub use http::HttpTransport;
pub use json::decode_json;
pub use progress::{contains_in_progress, IN_PROGRESS};
