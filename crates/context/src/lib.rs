//! # Promptpack Context
//!
//! The prompt-assembly pipeline: resolve user-supplied paths into concrete
//! files, wrap each file in a uniquely-identified document tag, concatenate
//! the results into context text, and count tokens over the resolved files.
//!
//! Everything here is synchronous and sequential — ordering of the output is
//! deterministic given deterministic file-system enumeration order, and each
//! call is independent and reentrant.

pub mod aggregate;
pub mod document;
pub mod format;
pub mod session;
pub mod token;

pub use aggregate::{Aggregate, AggregateOptions, aggregate};
pub use document::{Document, DocumentKind};
pub use format::human_format;
pub use session::list_sessions;
pub use token::TokenCounter;
