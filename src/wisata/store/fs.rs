use super::{AttractionStore, Scan};
use crate::error::{Result, WisataError};
use crate::model::{Attraction, AttractionPatch};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

const DATA_FILENAME: &str = "wisata.json";
const LOCK_FILENAME: &str = "wisata.lock";

/// File-backed store: the whole catalog is one JSON array on disk.
///
/// Mutations hold an exclusive lock on `wisata.lock` from load to save, so
/// several processes can share a data directory. Reads take no lock; the
/// document is only ever replaced by rename.
pub struct FileStore {
    root: PathBuf,
}

/// Exclusive write lock, released on drop.
struct WriteLock {
    file: File,
}

impl Drop for WriteLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn lock(&self) -> Result<WriteLock> {
        fs::create_dir_all(&self.root).map_err(|e| unavailable(&self.root, e))?;
        let path = self.root.join(LOCK_FILENAME);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|e| unavailable(&path, e))?;
        FileExt::lock_exclusive(&file).map_err(|e| unavailable(&path, e))?;
        Ok(WriteLock { file })
    }

    fn load(&self) -> Result<Vec<Attraction>> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(|e| unavailable(&path, e))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<Attraction> =
            serde_json::from_str(&content).map_err(|e| unavailable(&path, e))?;
        debug!(count = records.len(), path = %path.display(), "loaded catalog");
        Ok(records)
    }

    /// Write to a fresh temp file in the data dir, then rename it over the
    /// document. Callers hold the write lock.
    fn save(&self, _lock: &WriteLock, records: &[Attraction]) -> Result<()> {
        let path = self.data_path();
        let content = serde_json::to_string_pretty(records)?;
        let mut tmp = NamedTempFile::new_in(&self.root).map_err(|e| unavailable(&self.root, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| unavailable(&self.root, e))?;
        tmp.persist(&path).map_err(|e| unavailable(&path, e))?;
        debug!(count = records.len(), path = %path.display(), "saved catalog");
        Ok(())
    }
}

fn unavailable(path: &Path, err: impl std::fmt::Display) -> WisataError {
    WisataError::StoreUnavailable(format!("{}: {}", path.display(), err))
}

impl AttractionStore for FileStore {
    fn create(&mut self, record: &Attraction) -> Result<()> {
        let lock = self.lock()?;
        let mut records = self.load()?;
        if records.iter().any(|r| r.id == record.id) {
            return Err(WisataError::AlreadyExists(record.id.clone()));
        }
        records.push(record.clone());
        self.save(&lock, &records)?;
        info!(id = %record.id, name = %record.name, "created attraction");
        Ok(())
    }

    fn put(&mut self, record: &Attraction) -> Result<()> {
        let lock = self.lock()?;
        let mut records = self.load()?;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        self.save(&lock, &records)?;
        info!(id = %record.id, "stored attraction");
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Attraction> {
        self.load()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| WisataError::NotFound(id.to_string()))
    }

    fn update(&mut self, id: &str, patch: &AttractionPatch) -> Result<Attraction> {
        let lock = self.lock()?;
        let mut records = self.load()?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| WisataError::NotFound(id.to_string()))?;

        if !patch.apply_to(record) {
            return Ok(record.clone());
        }
        let updated = record.clone();
        self.save(&lock, &records)?;
        info!(id = %id, "updated attraction");
        Ok(updated)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let lock = self.lock()?;
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(WisataError::NotFound(id.to_string()));
        }
        self.save(&lock, &records)?;
        info!(id = %id, "deleted attraction");
        Ok(())
    }

    fn scan(&self) -> Result<Scan<'_>> {
        Ok(Box::new(self.load()?.into_iter()))
    }
}
