//! Nullable infrastructure for deterministic testing.
//!
//! Every collaborator outside the process (the HTTP backend, the
//! verification SDK) sits behind a trait in `bkyc-types`. This crate
//! provides test-friendly implementations that:
//! - Return scripted values
//! - Record what was asked of them
//! - Never touch the network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod capability;
pub mod transport;

pub use capability::{CapabilityCall, NullCapability};
pub use transport::{NullTransport, RecordedRequest};
