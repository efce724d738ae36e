use serde_json::Value;
use std::fs;
use std::io::BufWriter;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;
use crate::error::{IndexError, Result};

/// Read `path` and parse its whole contents as one JSON value.
pub fn read_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| IndexError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", content.len(), path.display());

    serde_json::from_str(&content).map_err(|source| IndexError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `nodes` as a JSON array to `path`, replacing any existing file.
///
/// The array goes to a uniquely named temp file next to `path` and is then
/// persisted over it, so readers never see a half-written document. On
/// failure the temp file is dropped and removed.
pub fn write_nodes(path: &Path, nodes: &[Value]) -> Result<()> {
    let write_error = |source| IndexError::Write { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
    debug!("Staging output in {}", tmp.path().display());

    let tmp = write_to(tmp, nodes).map_err(write_error)?;
    tmp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

fn write_to(tmp: NamedTempFile, nodes: &[Value]) -> std::io::Result<NamedTempFile> {
    let mut writer = BufWriter::new(tmp);
    serde_json::to_writer(&mut writer, nodes)?;
    let tmp = writer.into_inner().map_err(|e| e.into_error())?;
    tmp.as_file().sync_all()?;
    Ok(tmp)
}
