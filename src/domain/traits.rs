use crate::domain::error::OdlError;
use async_trait::async_trait;

/// Trait for translation backends served by the endpoint
///
/// Implementations can be swapped without touching the HTTP layer; the
/// integration tests plug in a canned backend this way.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Prepare the backend. The endpoint answers 403 until this succeeds.
    async fn warm_up(&self) -> Result<(), OdlError> {
        Ok(())
    }

    /// Translate `content` from `from` to `to`.
    ///
    /// `Ok(None)` means the backend ran but produced nothing.
    async fn translate(
        &self,
        from: &str,
        to: &str,
        content: &str,
    ) -> Result<Option<String>, OdlError>;
}
