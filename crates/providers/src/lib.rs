//! LLM completion providers for promptpack.
//!
//! Currently a single implementation: [`OpenAiCompatProvider`], which covers
//! the vast majority of hosted and local endpoints since most expose an
//! OpenAI-compatible `/v1/chat/completions` API.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatProvider;
