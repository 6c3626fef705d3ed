use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Write `contents` to `dir/name` through a temp file in `dir`, so a reader
/// never sees a partial file.
pub fn write_atomic(dir: &Path, name: &str, contents: &str) -> io::Result<PathBuf> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    commit(tmp, dir.join(name))
}

pub fn commit(tmp: NamedTempFile, dest: PathBuf) -> io::Result<PathBuf> {
    tmp.persist(&dest).map_err(|e| e.error)?;
    Ok(dest)
}
