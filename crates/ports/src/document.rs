// crates/ports/src/document.rs
use std::path::Path;

use readability_shared_kernel::Result;

/// Port for loading the full text behind a document path.
pub trait DocumentSource: Send + Sync {
    /// Read and decode the whole document.
    ///
    /// # Errors
    ///
    /// Implementations report a missing path as
    /// `InfrastructureError::InputNotFound` and any other failure as
    /// `InfrastructureError::FileRead`.
    fn load(&self, path: &Path) -> Result<String>;
}
