//! Session serialization using `MessagePack`.
//!
//! Transcripts are written with named fields so files stay readable by
//! other `MessagePack` tools.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use folnl_foundation::{Error, ErrorKind, Result};

use crate::session::Session;

/// Serializes a session to `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(session: &Session) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(session)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Deserializes a session from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid session.
pub fn from_bytes(bytes: &[u8]) -> Result<Session> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Saves a session to a file, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(session: &Session, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(session)?;
    let file = File::create(path).map_err(|e| io_error("create", path, &e))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .map_err(|e| io_error("write to", path, &e))?;
    writer.flush().map_err(|e| io_error("flush", path, &e))?;
    Ok(())
}

/// Loads a session from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a session.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Session> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error("open", path, &e))?;

    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| io_error("read", path, &e))?;
    from_bytes(&bytes)
}

fn io_error(action: &str, path: &Path, err: &std::io::Error) -> Error {
    Error::new(ErrorKind::Io(format!(
        "failed to {action} file '{}': {err}",
        path.display()
    )))
}
