// src/tables/io.rs
use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use super::order::OrderedTokens;
use super::registry::RegistrySpec;
use super::tokens::TokenDescriptor;

#[derive(Debug, Error)]
#[error("failed to write {}: {source}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl WriteError {
    fn new(path: &Path, source: std::io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }
}

// -------------------- registry input --------------------

pub fn load_registry_json_bytes(data: &[u8]) -> Result<RegistrySpec, String> {
    serde_json::from_slice::<RegistrySpec>(data)
        .map_err(|e| format!("Failed to parse registry JSON: {e}"))
}

pub fn load_registry_file(path: &Path) -> Result<RegistrySpec, String> {
    let data = fs::read(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    load_registry_json_bytes(&data)
}

// -------------------- manifest --------------------

#[derive(Serialize, Deserialize)]
struct ManifestDisk {
    tokens: Vec<TokenDescriptor>,
    extra_names: Vec<ExtraDisk>,
    id_count: usize,
}

#[derive(Serialize, Deserialize)]
struct ExtraDisk {
    name: String,
    id: u32,
}

impl From<&OrderedTokens> for ManifestDisk {
    fn from(t: &OrderedTokens) -> Self {
        Self {
            tokens: t.descriptors().to_vec(),
            extra_names: t
                .extra_names()
                .iter()
                .map(|(name, id)| ExtraDisk {
                    name: name.clone(),
                    id: *id,
                })
                .collect(),
            id_count: t.len(),
        }
    }
}

/// Pretty JSON listing every descriptor and identifier, for tooling that
/// wants to diff id assignments between runs.
pub fn manifest_json(t: &OrderedTokens) -> serde_json::Result<String> {
    let mut s = serde_json::to_string_pretty(&ManifestDisk::from(t))?;
    s.push('\n');
    Ok(s)
}

// -------------------- atomic write --------------------

/// Writes `contents` next to `path` and renames it into place, so readers
/// see either the old file or the complete new one.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), WriteError> {
    let instant = Instant::now();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    // NamedTempFile deletes itself on drop, so every early return cleans up.
    let tmp = NamedTempFile::new_in(dir).map_err(|e| WriteError::new(path, e))?;
    {
        let mut w = BufWriter::new(tmp.as_file());
        w.write_all(contents).map_err(|e| WriteError::new(path, e))?;
        w.flush().map_err(|e| WriteError::new(path, e))?;
    }
    tmp.as_file()
        .sync_all()
        .map_err(|e| WriteError::new(path, e))?;
    tmp.persist(path).map_err(|e| WriteError::new(path, e.error))?;

    log::debug!(
        "[io] wrote {} bytes to {} in {} ms",
        contents.len(),
        path.display(),
        instant.elapsed().as_millis()
    );
    Ok(())
}

pub fn save_manifest_json(path: &Path, t: &OrderedTokens) -> Result<(), WriteError> {
    let json = manifest_json(t).map_err(|e| WriteError::new(path, e.into()))?;
    write_atomic(path, json.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_json_defaults_missing_sections() {
        let spec = load_registry_json_bytes(br#"{"extra_names": ["VARIABLE"]}"#).unwrap();
        assert!(spec.definitions.is_empty());
        assert_eq!(spec.extra_names, vec!["VARIABLE".to_string()]);
        assert!(load_registry_json_bytes(b"[").is_err());
    }

    #[test]
    fn failed_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope").join("tokens.h");
        let err = write_atomic(&missing, b"x").unwrap_err();
        assert_eq!(err.path, missing);
        assert!(!missing.exists());
    }

    #[test]
    fn replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.h");
        fs::write(&path, "old").unwrap();
        write_atomic(&path, b"new contents").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new contents");
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
