//! HTTP status codes, reason phrases, and typed status errors.
//!
//! The registry maps every registered status code to its canonical reason
//! phrase and, for `4xx`/`5xx` codes, to a dedicated [`HttpError`] variant.
//! All tables are compile-time constants, every operation is a pure read.
#![warn(missing_debug_implementations)]

mod log;

pub mod error;
pub mod registry;
pub mod status;

pub use error::{Category, HttpError, StatusError};
pub use registry::{raise_for, reason_phrase, validate};
pub use status::{InvalidStatusCode, StatusCode};
