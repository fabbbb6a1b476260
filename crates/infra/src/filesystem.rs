// crates/infra/src/filesystem.rs
use std::{io::ErrorKind, path::Path};

use readability_ports::DocumentSource;
use readability_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// Loads documents from the local filesystem.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// rejected, so any readable file can be scored.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDocumentSource;

impl FsDocumentSource {
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentSource for FsDocumentSource {
    fn load(&self, path: &Path) -> Result<String> {
        if path.is_dir() {
            return Err(InfrastructureError::InputNotFound { path: path.to_path_buf() }.into());
        }

        let bytes = FileReader::read_to_end(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InfrastructureError::InputNotFound { path: path.to_path_buf() },
            _ => InfrastructureError::FileRead { path: path.to_path_buf(), source },
        })?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());

        Ok(decode(bytes, path))
    }
}

fn decode(bytes: Vec<u8>, path: &Path) -> String {
    String::from_utf8(bytes).unwrap_or_else(|err| {
        log::warn!("{} is not valid UTF-8; invalid sequences were replaced", path.display());
        String::from_utf8_lossy(err.as_bytes()).into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_keeps_valid_utf8() {
        let text = decode("naïve café".as_bytes().to_vec(), Path::new("x"));
        assert_eq!(text, "naïve café");
    }

    #[test]
    fn decode_replaces_invalid_bytes() {
        let text = decode(vec![b'o', b'k', 0xFF, b'!'], Path::new("x"));
        assert_eq!(text, "ok\u{FFFD}!");
    }
}
