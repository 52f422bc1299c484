//! Filesystem-backed blob storage for the entry book.
//!
//! Stores the serialized book as a single JSON file. Writes go through a
//! temporary sibling file followed by a rename, so a crash mid-write never
//! truncates the previously saved book.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use kakeibo_core::{CoreError, EntryStorage};

const DEFAULT_FILE_NAME: &str = "entries.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone)]
pub struct JsonEntryStorage {
    path: PathBuf,
}

impl JsonEntryStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Uses the conventional file name under an application data directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntryStorage for JsonEntryStorage {
    fn read_all(&self) -> Result<Option<String>, CoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|err| CoreError::StorageRead(err.to_string()))
    }

    fn write_all(&self, blob: &str) -> Result<(), CoreError> {
        let tmp = tmp_path(&self.path);
        write_file(&tmp, blob)
            .and_then(|_| fs::rename(&tmp, &self.path))
            .map_err(|err| CoreError::StorageWrite(err.to_string()))
    }
}

fn write_file(path: &Path, data: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
