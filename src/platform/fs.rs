// Whole-file text read/write wrappers

use crate::error::{Result, ToolbeltError};
use std::fs;
use std::io;
use std::path::Path;

/// Read a whole file as UTF-8 text
///
/// A missing file is a [`ToolbeltError::FileNotFound`] unless `not_exists_ok`
/// is set, in which case it reads as an empty string. Every other I/O error
/// is passed through.
pub fn read_text_file<P: AsRef<Path>>(path: P, not_exists_ok: bool) -> Result<String> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if not_exists_ok {
                log::debug!("{} does not exist, reading as empty", path.display());
                Ok(String::new())
            } else {
                Err(ToolbeltError::FileNotFound(path.to_path_buf()))
            }
        }
        Err(e) => Err(e.into()),
    }
}

/// Write `text` to a file, replacing whatever it held
pub fn write_text_file<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}
