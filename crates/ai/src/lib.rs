//! AI mediation layer for the writing assistant.
//!
//! Wraps a single chat-completion provider behind a small client
//! ([`client::ChatClient`]), builds the per-feature prompts from request
//! records ([`prompts`]), and decodes the structured JSON replies the
//! review/deconstruct/naming features expect ([`decode`]).

pub mod client;
pub mod decode;
pub mod prompts;

pub use client::{AiError, ChatClient, ChatMessage, ProviderConfig, Sampling};
