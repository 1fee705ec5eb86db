//! JSON record writer.

use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Write `value` as pretty-printed JSON (two-space indent, trailing newline),
/// replacing any existing file.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    std::fs::write(path, bytes)?;
    Ok(())
}
