use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::{KvStore, StoreError};

/// One JSON file per key inside a directory. Writes go to a temporary file
/// first and are renamed into place, so a crash mid-write leaves the previous
/// value intact.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KvStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path().join("nested").join("data"));

        assert_eq!(store.get("resume-data").await.unwrap(), None);
        store.set("resume-data", "{\"summary\":\"x\"}").await.unwrap();
        assert_eq!(
            store.get("resume-data").await.unwrap().as_deref(),
            Some("{\"summary\":\"x\"}")
        );
    }

    #[tokio::test]
    async fn test_values_survive_a_new_handle() {
        let tmp = tempfile::tempdir().unwrap();
        FileStore::new(tmp.path())
            .set("resume-sections", "[\"summary\"]")
            .await
            .unwrap();

        let reopened = FileStore::new(tmp.path());
        assert_eq!(
            reopened.get("resume-sections").await.unwrap().as_deref(),
            Some("[\"summary\"]")
        );
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path());
        store.set("resume-data", "{}").await.unwrap();
        assert!(!tmp.path().join("resume-data.json.tmp").exists());
        assert!(tmp.path().join("resume-data.json").exists());
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path());
        assert!(matches!(
            store.set("../escape", "{}").await,
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(
            store.get("a/b").await,
            Err(StoreError::InvalidKey(_))
        ));
    }
}
