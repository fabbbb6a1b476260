use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Read the entire file into memory. The handle is closed on return.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let file = Self::open(path)?;
        let capacity = file.metadata().map(|m| m.len()).unwrap_or(0);
        let mut buf = Vec::with_capacity(usize::try_from(capacity).unwrap_or(0));
        BufReader::new(file).read_to_end(&mut buf)?;
        Ok(buf)
    }
}
