use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::AppResult;

/// The closed set of record collections. Each maps to one JSON file under
/// the data directory holding the full array of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    News,
    Comments,
    Polls,
    Admins,
    Users,
    Categories,
    Matches,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::News,
        Collection::Comments,
        Collection::Polls,
        Collection::Admins,
        Collection::Users,
        Collection::Categories,
        Collection::Matches,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Collection::News => "news.json",
            Collection::Comments => "comments.json",
            Collection::Polls => "polls.json",
            Collection::Admins => "admins.json",
            Collection::Users => "users.json",
            Collection::Categories => "categories.json",
            Collection::Matches => "matches.json",
        }
    }
}

/// Flat-file record store: every collection is one pretty-printed JSON array
/// on disk. Reads take the collection's read lock; every mutation goes
/// through [`Store::update`], which holds the write lock across the whole
/// read-modify-write so concurrent writers serialize instead of overwriting
/// each other. Files are replaced atomically (write-to-temp, then rename).
///
/// There is still no transaction spanning two collections; callers that
/// touch more than one (admin creation) do so as independent steps.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    data_dir: PathBuf,
    locks: HashMap<Collection, RwLock<()>>,
}

impl Store {
    /// Opens the store, creating the data directory and an empty
    /// `matches.json` on first run.
    pub fn open(data_dir: impl AsRef<Path>) -> AppResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;

        let matches_file = data_dir.join(Collection::Matches.file_name());
        if !matches_file.exists() {
            std::fs::write(&matches_file, b"[]")?;
        }

        let locks = Collection::ALL
            .into_iter()
            .map(|collection| (collection, RwLock::new(())))
            .collect();

        Ok(Store {
            inner: Arc::new(StoreInner { data_dir, locks }),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.inner.data_dir
    }

    /// Reads all records of a collection. A missing file is an empty
    /// collection, not an error.
    pub async fn read<T>(&self, collection: Collection) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let _guard = self.lock(collection).read().await;
        self.load(collection).await
    }

    /// Replaces the full record sequence of a collection.
    pub async fn write<T>(&self, collection: Collection, records: &[T]) -> AppResult<()>
    where
        T: Serialize,
    {
        let _guard = self.lock(collection).write().await;
        self.persist(collection, records).await
    }

    /// Read-modify-write under the collection's write lock. The file is only
    /// rewritten when the closure succeeds, so a validation or not-found
    /// failure leaves the collection untouched.
    pub async fn update<T, R, F>(&self, collection: Collection, f: F) -> AppResult<R>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> AppResult<R>,
    {
        let _guard = self.lock(collection).write().await;
        let mut records: Vec<T> = self.load(collection).await?;
        let result = f(&mut records)?;
        self.persist(collection, &records).await?;
        Ok(result)
    }

    fn lock(&self, collection: Collection) -> &RwLock<()> {
        // ALL collections are registered in open()
        &self.inner.locks[&collection]
    }

    fn path_of(&self, collection: Collection) -> PathBuf {
        self.inner.data_dir.join(collection.file_name())
    }

    async fn load<T>(&self, collection: Collection) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        match tokio::fs::read(self.path_of(collection)).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist<T>(&self, collection: Collection, records: &[T]) -> AppResult<()>
    where
        T: Serialize,
    {
        let path = self.path_of(collection);
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(records)?;

        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn open_store(dir: &tempfile::TempDir) -> Store {
        Store::open(dir.path()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_collection_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        let records: Vec<Value> = store.read(Collection::News).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_open_creates_data_dir_and_matches_file() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("nested").join("data");
        let store = Store::open(&data_dir).unwrap();

        assert!(data_dir.is_dir());
        let matches_file = data_dir.join("matches.json");
        assert_eq!(std::fs::read_to_string(&matches_file).unwrap(), "[]");

        let records: Vec<Value> = store.read(Collection::Matches).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        store
            .write(Collection::Categories, &[json!({"id": "1", "name": "Football"})])
            .await
            .unwrap();

        let records: Vec<Value> = store.read(Collection::Categories).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], "Football");
    }

    #[tokio::test]
    async fn test_update_mutates_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        store
            .write(Collection::News, &[json!({"id": "a"})])
            .await
            .unwrap();
        store
            .update(Collection::News, |records: &mut Vec<Value>| {
                records.push(json!({"id": "b"}));
                Ok(())
            })
            .await
            .unwrap();

        let records: Vec<Value> = store.read(Collection::News).await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_update_leaves_collection_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        store
            .write(Collection::Categories, &[json!({"id": "1"})])
            .await
            .unwrap();

        let result: AppResult<()> = store
            .update(Collection::Categories, |records: &mut Vec<Value>| {
                records.clear();
                Err(crate::error::AppError::NotFound("nope".to_string()))
            })
            .await;
        assert!(result.is_err());

        let records: Vec<Value> = store.read(Collection::Categories).await.unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_updates_lose_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .update(Collection::Polls, move |records: &mut Vec<Value>| {
                        records.push(json!({ "n": i }));
                        Ok(())
                    })
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let records: Vec<Value> = store.read(Collection::Polls).await.unwrap();
        assert_eq!(records.len(), 32);
    }

    #[tokio::test]
    async fn test_persisted_json_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        store
            .write(Collection::Users, &[json!({"id": "u1"})])
            .await
            .unwrap();

        let raw = std::fs::read_to_string(dir.path().join("users.json")).unwrap();
        assert!(raw.contains("\n  {"));
    }
}
