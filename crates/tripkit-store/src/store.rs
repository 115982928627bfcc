//! JSON-file saved-items store.
//!
//! Items live in a single JSON array on disk, newest first. Writes are
//! serialized through a process-local mutex; cross-process writers are not
//! coordinated.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::StoreError;

/// One saved note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedItem {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// Flat-file store backing the saved-items list.
pub struct ItemStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ItemStore {
    /// Opens the store at `path`, creating parent directories and seeding an
    /// empty list when the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file or its directories cannot be
    /// created.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            // parent() yields "" for bare file names; nothing to create then.
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        if !fs::try_exists(&path).await? {
            fs::write(&path, "[]").await?;
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Lists all items, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read or
    /// [`StoreError::Malformed`] if it does not hold a valid item array.
    pub async fn list(&self) -> Result<Vec<SavedItem>, StoreError> {
        self.read_items().await
    }

    /// Creates an item and prepends it to the stored list. Title and notes
    /// are stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read or written, or
    /// [`StoreError::Malformed`] if the existing contents cannot be parsed.
    pub async fn create(&self, title: &str, notes: &str) -> Result<SavedItem, StoreError> {
        let item = SavedItem {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            notes: notes.trim().to_string(),
            created_at: Utc::now(),
        };

        let _guard = self.write_lock.lock().await;
        let mut items = self.read_items().await?;
        items.insert(0, item.clone());
        self.write_items(&items).await?;
        Ok(item)
    }

    /// Confirms the backing file is readable and parseable.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ItemStore::list`].
    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.read_items().await.map(|_| ())
    }

    async fn read_items(&self) -> Result<Vec<SavedItem>, StoreError> {
        let data = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&data)?)
    }

    async fn write_items(&self, items: &[SavedItem]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}
