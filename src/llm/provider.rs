//! The provider trait: one prompt in, one completion out.

use crate::error::PolishError;
use async_trait::async_trait;

/// A hosted completion model.
///
/// Both pipeline stages submit a single user-role prompt and take the
/// textual completion verbatim; no schema is imposed on the response.
/// Implementations own sampling parameters, credentials and transport.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Submit `prompt` and return the completion text unmodified.
    async fn complete(&self, prompt: &str) -> Result<String, PolishError>;

    /// Short provider name for logs and the form footer.
    fn name(&self) -> &str;
}
