//! Scoped binary file writes.

use crate::error::IoResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes a byte buffer to `path`, creating or truncating the file.
///
/// The handle is flushed and released before returning, so a reader
/// opened immediately afterwards sees the complete file.
pub fn write_blob(path: &Path, bytes: &[u8]) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "wrote binary blob");
    Ok(())
}
