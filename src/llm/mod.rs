//! Completion provider integration.
//!
//! The pipeline talks to the hosted model through the [`CompletionProvider`]
//! trait object so the remote call can be swapped out: [`OpenAiProvider`]
//! drives any OpenAI-compatible chat-completions endpoint in production,
//! [`MockProvider`] records prompts and returns canned replies in tests.

mod mock;
mod openai;
mod provider;

pub use mock::MockProvider;
pub use openai::OpenAiProvider;
pub use provider::CompletionProvider;
