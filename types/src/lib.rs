//! Fundamental types for the Boost KYC demo.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! session tokens, document types, and the two seams to the outside world
//! (the HTTP transport and the external verification capability).

pub mod capability;
pub mod capture;
pub mod document;
pub mod session;
pub mod transport;

pub use capability::{VerificationCapability, VerificationFailure, VerificationMode};
pub use capture::{CaptureEvent, CaptureEvents};
pub use document::{DocumentType, ParseDocumentTypeError};
pub use session::SessionToken;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
