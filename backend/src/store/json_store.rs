//! A typed record list persisted as one pretty-printed JSON document

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;

use crate::error::AppResult;

/// A record kind whose ids are assigned by the store
pub trait Record {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

/// File-backed list of records of one kind
///
/// Reads go straight to the file. Every mutation is a full
/// read-modify-write of the document, serialised by `write_lock` within this
/// process. A new document is written beside the old one and renamed over it,
/// so readers see either the previous or the next committed list, never a
/// partial one. Separate processes sharing the file can still lose updates.
pub struct JsonStore<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _kind: PhantomData<fn() -> T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _kind: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next document is written to before the rename
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// All records in insertion order; a missing file is an empty list
    pub async fn get_all(&self) -> AppResult<Vec<T>> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(Vec::new());
        }

        let json = tokio::fs::read_to_string(&self.path).await?;
        if json.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Option<Vec<T>> = serde_json::from_str(&json)?;
        Ok(records.unwrap_or_default())
    }

    /// Replace the whole list
    pub async fn replace_all(&self, records: &[T]) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        self.write(records).await
    }

    async fn write(&self, records: &[T]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(records)?;
        let staging = self.staging_path();
        tokio::fs::write(&staging, json).await?;
        tokio::fs::rename(&staging, &self.path).await?;
        tracing::debug!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

impl<T> JsonStore<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    /// Append a record, assigning `max(existing id) + 1` (1 for an empty list)
    pub async fn append(&self, mut record: T) -> AppResult<T>
    where
        T: Clone,
    {
        let _guard = self.write_lock.lock().await;
        let mut records = self.get_all().await?;

        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        record.set_id(next_id);
        records.push(record.clone());

        self.write(&records).await?;
        Ok(record)
    }

    /// Append several records in one write, assigning consecutive ids
    pub async fn append_many(&self, new_records: Vec<T>) -> AppResult<Vec<T>>
    where
        T: Clone,
    {
        let _guard = self.write_lock.lock().await;
        let mut records = self.get_all().await?;

        let mut next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        let mut stored = Vec::with_capacity(new_records.len());
        for mut record in new_records {
            record.set_id(next_id);
            next_id += 1;
            records.push(record.clone());
            stored.push(record);
        }

        self.write(&records).await?;
        Ok(stored)
    }

    /// Replace the record with a matching id in place
    ///
    /// Returns false, without touching the file, when no record matches.
    pub async fn update_by_id(&self, record: T) -> AppResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.get_all().await?;

        match records.iter().position(|r| r.id() == record.id()) {
            Some(index) => {
                records[index] = record;
                self.write(&records).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the record with a matching id; false when none matched
    pub async fn remove_by_id(&self, id: i64) -> AppResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.get_all().await?;

        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Ok(false);
        }

        self.write(&records).await?;
        Ok(true)
    }

    /// Look up a single record by id
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<T>> {
        Ok(self.get_all().await?.into_iter().find(|r| r.id() == id))
    }
}
