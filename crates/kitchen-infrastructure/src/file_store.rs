//! File-backed durable key-value store.
//!
//! One file per key under the data directory. Values are written through a
//! temp file followed by a rename, so a crash mid-write never leaves a
//! half-written blob behind. No locking across processes; the store is
//! shared process-wide and the session store serializes its own writers.

use async_trait::async_trait;
use kitchen_core::{KeyValueStore, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Opens (and creates if needed) a store rooted at `dir`.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(encode_key(key))
    }
}

/// Maps a storage key to a filename. Alphanumerics, `_`, `-` and `.` pass
/// through; anything else is `%XX`-escaped so distinct keys never collide.
fn encode_key(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'-' | b'.' => {
                name.push(byte as char)
            }
            other => {
                name.push('%');
                name.push_str(&format!("{:02X}", other));
            }
        }
    }
    name
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, &path).await?;
        tracing::debug!(key, bytes = value.len(), "wrote key-value blob");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_absent_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).await.unwrap();
        assert_eq!(store.get("user_u1_username").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).await.unwrap();
        store.set("user_u1_username", "Ada").await.unwrap();
        store.set("user_u1_username", "Grace").await.unwrap();
        assert_eq!(
            store.get("user_u1_username").await.unwrap().as_deref(),
            Some("Grace")
        );
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileKeyValueStore::open(dir.path()).await.unwrap();
            store.set("user_u1_savedRecipes", "[]").await.unwrap();
        }
        let store = FileKeyValueStore::open(dir.path()).await.unwrap();
        assert_eq!(
            store.get("user_u1_savedRecipes").await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn hostile_key_characters_are_escaped() {
        assert_eq!(encode_key("user_u1_savedRecipes"), "user_u1_savedRecipes");
        assert_eq!(encode_key("a/b"), "a%2Fb");
        assert_ne!(encode_key("a/b"), encode_key("a_b"));
    }
}
