// src/fs/mock.rs

use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(Vec<u8>),
    Dir,
    Symlink(PathBuf),
}

/// In-memory filesystem keyed by absolute path.
///
/// Parent directories of added files are created implicitly. Symlink targets
/// are stored verbatim and only followed by [`FileSystem::exists`].
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    entries: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        entries.insert(PathBuf::from("/"), MockEntry::Dir);

        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        let mut entries = self.entries.lock().unwrap();
        if let Some(parent) = path.parent() {
            ensure_dirs(&mut entries, parent);
        }
        entries.insert(path.to_path_buf(), MockEntry::File(content.into()));
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut entries = self.entries.lock().unwrap();
        ensure_dirs(&mut entries, path.as_ref());
    }

    pub fn entry(&self, path: impl AsRef<Path>) -> Option<MockEntry> {
        self.entries.lock().unwrap().get(path.as_ref()).cloned()
    }

    /// Number of symlinks anywhere in the mock.
    pub fn symlink_count(&self) -> usize {
        self.entries
            .lock()
            .unwrap()
            .values()
            .filter(|e| matches!(e, MockEntry::Symlink(_)))
            .count()
    }
}

fn ensure_dirs(entries: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        entries
            .entry(ancestor.to_path_buf())
            .or_insert(MockEntry::Dir);
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let entries = self.entries.lock().unwrap();
        match entries.get(path) {
            Some(MockEntry::File(content)) => {
                String::from_utf8(content.clone()).map_err(|e| anyhow!("Invalid UTF-8: {}", e))
            }
            Some(_) => Err(anyhow!("Not a regular file: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        let parent_ok = path
            .parent()
            .is_none_or(|p| matches!(entries.get(p), Some(MockEntry::Dir)));
        if !parent_ok {
            return Err(anyhow!("No such directory: {:?}", path.parent()));
        }
        entries.insert(path.to_path_buf(), MockEntry::File(contents.to_vec()));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.add_dir(path);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let entries = self.entries.lock().unwrap();
        match entries.get(path) {
            Some(MockEntry::Symlink(target)) => entries.contains_key(target),
            Some(_) => true,
            None => false,
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        let entries = self.entries.lock().unwrap();
        matches!(entries.get(path), Some(MockEntry::Dir))
    }

    fn entry_exists(&self, path: &Path) -> bool {
        self.entries.lock().unwrap().contains_key(path)
    }

    fn symlink(&self, target: &Path, link: &Path) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        let parent = link
            .parent()
            .ok_or_else(|| anyhow!("No parent directory: {:?}", link))?;
        if !matches!(entries.get(parent), Some(MockEntry::Dir)) {
            return Err(anyhow!("No such file or directory: {:?}", parent));
        }
        if entries.contains_key(link) {
            return Err(anyhow!("File exists: {:?}", link));
        }
        entries.insert(link.to_path_buf(), MockEntry::Symlink(target.to_path_buf()));
        Ok(())
    }

    fn read_link(&self, link: &Path) -> Result<PathBuf> {
        match self.entries.lock().unwrap().get(link) {
            Some(MockEntry::Symlink(target)) => Ok(target.clone()),
            _ => Err(anyhow!("Not a symlink: {:?}", link)),
        }
    }
}
