//! # Language Model Integration
//!
//! Optional polish for generated briefings through an OpenAI-compatible
//! chat-completions API.
//!
//! Enhancement is best-effort by design: a missing API key means the step
//! is skipped, and an API failure leaves the detection-built document
//! untouched. The client never writes files and is the only part of the
//! crate that touches the network.
//!
//! ## Key Types
//!
//! - [`LlmClient`] - Blocking HTTP client for the chat-completions endpoint
//! - [`LlmError`] - Transport, API, and response-shape failures
//! - [`api_key`] - Key resolution: environment first, then config file

mod client;

pub use client::{api_key, LlmClient, LlmError};
