use crate::dataset::Payload;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;

/// PayloadSource port supplying the two source documents.
///
/// The manifest and the flags document are independent and may be fetched
/// concurrently; the use case joins both before any traversal starts, and
/// either failure aborts initialization as a whole.
///
/// # Async Support
/// Both methods are async so network adapters can overlap the two fetches.
/// Implementations must be `Send + Sync`.
#[async_trait]
pub trait PayloadSource: Send + Sync {
    /// Fetches the resolved dependency manifest.
    ///
    /// # Errors
    /// Returns an error if the document cannot be loaded or parsed; the
    /// caller treats this as fatal and never starts the walk.
    async fn fetch_payload(&self) -> Result<Payload>;

    /// Fetches the flags/configuration document (opaque mapping, passed
    /// through to the dataset unmodified).
    async fn fetch_flags(&self) -> Result<Value>;
}
