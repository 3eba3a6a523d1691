use crate::error::{IniError, ParseResult};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Extension every INI path must carry
pub const INI_EXTENSION: &str = "ini";

/// Reject paths that do not end in `.ini`
pub fn ensure_ini_extension(path: &Path) -> ParseResult<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(INI_EXTENSION) => Ok(()),
        other => Err(IniError::invalid_extension(
            path.display().to_string(),
            other.map(|ext| format!(".{}", ext)).unwrap_or_default(),
        )),
    }
}

/// Read an INI file into memory
pub fn read(path: &Path) -> ParseResult<String> {
    ensure_ini_extension(path)?;
    fs::read_to_string(path).map_err(|e| IniError::io(path.display().to_string(), &e))
}

/// Write text to an INI file, creating or truncating it
pub fn write(path: &Path, contents: &str) -> ParseResult<()> {
    ensure_ini_extension(path)?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let to_io_error = |e: std::io::Error| IniError::io(path.display().to_string(), &e);
    let mut file = options.open(path).map_err(to_io_error)?;
    file.write_all(contents.as_bytes()).map_err(to_io_error)?;
    Ok(())
}
