// Mon Oct 12 2026 - Alex

use crate::entity::RawDocument;
use crate::resolve::StoreError;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};

/// Document database the resolver reads from. Lookups are by identifier
/// equality only; richer querying goes through `search`.
pub trait TypeStore {
    fn contains(&self, identifier: &str) -> bool;
    fn get(&self, identifier: &str) -> Result<Option<RawDocument>, StoreError>;
    fn insert_many(&self, documents: Vec<RawDocument>) -> Result<usize, StoreError>;
    fn search(
        &self,
        predicate: &dyn Fn(&RawDocument) -> bool,
    ) -> Result<Vec<RawDocument>, StoreError>;
}

/// In-memory store. Documents sharing an identifier are kept once per tag.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<IndexMap<String, Vec<RawDocument>>>,
    tag: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts lookups to documents carrying `tag`.
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    pub fn from_documents(documents: Vec<RawDocument>) -> Self {
        let store = Self::new();
        store.insert_all(documents);
        store
    }

    fn matches(&self, doc: &RawDocument) -> bool {
        match &self.tag {
            Some(tag) => doc.tag.as_deref() == Some(tag.as_str()),
            None => true,
        }
    }

    fn insert_all(&self, documents: Vec<RawDocument>) -> usize {
        let mut map = self.documents.write();
        let count = documents.len();
        for doc in documents {
            let slot = map.entry(doc.id.clone()).or_default();
            match slot.iter_mut().find(|d| d.tag == doc.tag) {
                Some(existing) => *existing = doc,
                None => slot.push(doc),
            }
        }
        count
    }

    pub fn len(&self) -> usize {
        self.documents.read().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn all(&self) -> Vec<RawDocument> {
        self.documents.read().values().flatten().cloned().collect()
    }

    pub fn clear(&self) {
        self.documents.write().clear();
    }
}

impl TypeStore for MemoryStore {
    fn contains(&self, identifier: &str) -> bool {
        self.documents
            .read()
            .get(identifier)
            .is_some_and(|docs| docs.iter().any(|d| self.matches(d)))
    }

    fn get(&self, identifier: &str) -> Result<Option<RawDocument>, StoreError> {
        Ok(self
            .documents
            .read()
            .get(identifier)
            .and_then(|docs| docs.iter().find(|d| self.matches(d)).cloned()))
    }

    fn insert_many(&self, documents: Vec<RawDocument>) -> Result<usize, StoreError> {
        Ok(self.insert_all(documents))
    }

    fn search(
        &self,
        predicate: &dyn Fn(&RawDocument) -> bool,
    ) -> Result<Vec<RawDocument>, StoreError> {
        Ok(self
            .documents
            .read()
            .values()
            .flatten()
            .filter(|d| self.matches(d) && predicate(d))
            .cloned()
            .collect())
    }
}

/// JSON file on disk, read whole at open and written back by `flush`.
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    memory: MemoryStore,
}

impl LocalStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let documents: Vec<RawDocument> = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            Vec::new()
        };
        log::debug!("opened {} with {} documents", path.display(), documents.len());
        Ok(Self {
            path,
            memory: MemoryStore::from_documents(documents),
        })
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.memory = self.memory.with_tag(tag);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.memory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    pub fn flush(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.memory.all())?;
        fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl TypeStore for LocalStore {
    fn contains(&self, identifier: &str) -> bool {
        self.memory.contains(identifier)
    }

    fn get(&self, identifier: &str) -> Result<Option<RawDocument>, StoreError> {
        self.memory.get(identifier)
    }

    fn insert_many(&self, documents: Vec<RawDocument>) -> Result<usize, StoreError> {
        self.memory.insert_many(documents)
    }

    fn search(
        &self,
        predicate: &dyn Fn(&RawDocument) -> bool,
    ) -> Result<Vec<RawDocument>, StoreError> {
        self.memory.search(predicate)
    }
}
