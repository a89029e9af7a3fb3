use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use anyhow::Context as _;

/// Durable string key/value storage, the shape of a browser's local storage.
///
/// Reads and writes are unconditional single-key operations. Writers never see
/// an error: a store that cannot persist logs and carries on.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// A JSON file of string entries, rewritten on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(path: PathBuf) -> Self {
        let entries = match std::fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(entries) => entries,
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "unreadable preference file; all stored preferences reset to defaults"
                    );
                    BTreeMap::new()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "cannot read preference file");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    /// Opens the store for one origin under `dir`. Each origin gets its own
    /// file, so preferences never leak between sites.
    pub fn for_origin(dir: &Path, origin: &str) -> Self {
        let hash = blake3::hash(origin.as_bytes()).to_hex();
        let name = format!("{}.json", &hash.as_str()[..16]);
        Self::open(dir.join(name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }
        let bytes = serde_json::to_vec_pretty(&self.entries).context("encode preferences")?;
        std::fs::write(&self.path, bytes)
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            tracing::warn!(key, error = %format!("{e:#}"), "failed to persist preference");
        }
    }
}
