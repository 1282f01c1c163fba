//! # Promptpack Core
//!
//! Domain types, traits, and error definitions for the promptpack chat
//! assistant. This crate has **zero framework dependencies** — it defines the
//! domain model that all other crates implement against.
//!
//! The `Provider` trait is the seam between prompt assembly (local, file-system
//! bound) and text generation (remote, HTTP bound). Implementations live in
//! `promptpack-providers`; tests substitute mocks.

pub mod error;
pub mod message;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use error::{ContextError, Error, ProviderError, Result};
pub use message::{Message, Role};
pub use provider::{CompletionRequest, CompletionResponse, Provider, Usage};
