use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot write {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

// Partial output is removed only when `path` is a regular file; device nodes
// and other special files are left alone.
pub fn emit(bytes: &[u8], path: impl AsRef<Path>) -> Result<usize, Error> {
    let path = path.as_ref();
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_err)?;
    if let Err(err) = file.write_all(bytes).and_then(|_| file.flush()) {
        let is_regular = file.metadata().map(|m| m.is_file()).unwrap_or(false);
        drop(file);
        if is_regular {
            let _ = fs::remove_file(path);
        }
        return Err(io_err(err));
    }

    Ok(bytes.len())
}
