//! Whole-document JSON persistence.
//!
//! All store data lives in four JSON documents under the data directory,
//! each read and rewritten as a whole. There are no partial updates and
//! no schema migrations; the expected data volume makes full-document
//! rewrite acceptable.
//!
//! # Concurrency
//!
//! Each document has its own async mutex. Every mutation goes through
//! [`DocumentStore::update`], which holds the document's lock across the
//! read-modify-write cycle so concurrent appends are linearizable and
//! cannot lose each other's records. Plain reads bypass the lock: a
//! document is only ever replaced wholesale (write-to-temp then rename),
//! so a reader never observes a half-written file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

/// Errors from reading or writing a document.
///
/// Read failures are swallowed by [`DocumentStore::load`]; only write
/// paths surface these to callers.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// The four persisted documents, keyed by file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKey {
    Products,
    Orders,
    Categories,
    Settings,
}

impl DocumentKey {
    /// All document keys, in bootstrap order.
    pub const ALL: [Self; 4] = [Self::Products, Self::Orders, Self::Categories, Self::Settings];

    /// File name of the document under the data directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Products => "products.json",
            Self::Orders => "orders.json",
            Self::Categories => "categories.json",
            Self::Settings => "settings.json",
        }
    }
}

/// A collection persisted as one JSON document.
///
/// `default()` is what readers get when the file is missing or
/// malformed; `seed()` is what the first-run bootstrap writes.
pub trait Document: Serialize + DeserializeOwned + Default + Send + 'static {
    /// Which document file this collection lives in.
    const KEY: DocumentKey;

    /// First-run contents. Defaults to the empty collection.
    #[must_use]
    fn seed() -> Self {
        Self::default()
    }
}

/// Handle to the on-disk document store.
///
/// Cheaply cloneable; clones share the per-document locks.
#[derive(Clone)]
pub struct DocumentStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    data_dir: PathBuf,
    products_lock: Mutex<()>,
    orders_lock: Mutex<()>,
    categories_lock: Mutex<()>,
    settings_lock: Mutex<()>,
}

impl DocumentStore {
    /// Create a store rooted at the given data directory.
    ///
    /// No I/O happens here; seed the documents via
    /// [`Self::ensure_seeded`] before serving.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                data_dir: data_dir.into(),
                products_lock: Mutex::new(()),
                orders_lock: Mutex::new(()),
                categories_lock: Mutex::new(()),
                settings_lock: Mutex::new(()),
            }),
        }
    }

    /// The directory holding the document files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.inner.data_dir
    }

    /// Load a document, falling back to the empty collection.
    ///
    /// A missing, unreadable, or malformed file is logged and reported
    /// as `T::default()`; readers are never blocked by persistence
    /// failures.
    pub async fn load<T: Document>(&self) -> T {
        let path = self.path_for(T::KEY);
        match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => value,
                Err(error) => {
                    tracing::warn!(
                        document = T::KEY.file_name(),
                        %error,
                        "malformed document, treating as empty"
                    );
                    T::default()
                }
            },
            Err(error) => {
                tracing::warn!(
                    document = T::KEY.file_name(),
                    %error,
                    "unreadable document, treating as empty"
                );
                T::default()
            }
        }
    }

    /// Apply a mutation to a document inside its critical section.
    ///
    /// Holds the document's lock across load, `f`, and save, so
    /// concurrent `update` calls on the same document serialize and no
    /// append can overwrite another. The closure's return value is
    /// passed back to the caller.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the rewritten document cannot be
    /// persisted; the mutation is not visible in that case.
    pub async fn update<T, R>(&self, f: impl FnOnce(&mut T) -> R + Send) -> Result<R, StoreError>
    where
        T: Document,
        R: Send,
    {
        let _guard = self.lock_for(T::KEY).await;
        let mut value: T = self.load().await;
        let result = f(&mut value);
        self.save(&value).await?;
        Ok(result)
    }

    /// Replace a document wholesale.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the document cannot be persisted.
    pub async fn replace<T: Document>(&self, value: T) -> Result<(), StoreError> {
        let _guard = self.lock_for(T::KEY).await;
        self.save(&value).await
    }

    /// Write the document's first-run seed if its file is absent.
    ///
    /// An existing file is left untouched, so a restart never clobbers
    /// live data.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the data directory or the seed file
    /// cannot be created.
    pub async fn ensure_seeded<T: Document>(&self) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.inner.data_dir).await?;
        let path = self.path_for(T::KEY);
        if tokio::fs::try_exists(&path).await? {
            return Ok(());
        }
        tracing::info!(document = T::KEY.file_name(), "seeding document");
        self.save(&T::seed()).await
    }

    /// Serialize and atomically replace the document file.
    ///
    /// Writes to a sibling temp file and renames over the target, so a
    /// concurrent reader sees either the old contents or the new ones.
    async fn save<T: Document>(&self, value: &T) -> Result<(), StoreError> {
        let path = self.path_for(T::KEY);
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(value)?;
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    fn path_for(&self, key: DocumentKey) -> PathBuf {
        self.inner.data_dir.join(key.file_name())
    }

    async fn lock_for(&self, key: DocumentKey) -> MutexGuard<'_, ()> {
        match key {
            DocumentKey::Products => self.inner.products_lock.lock().await,
            DocumentKey::Orders => self.inner.orders_lock.lock().await,
            DocumentKey::Categories => self.inner.categories_lock.lock().await,
            DocumentKey::Settings => self.inner.settings_lock.lock().await,
        }
    }
}
