//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use skillsmith_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SkillResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can hand one clone to a service
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of a file, if present (testing helper).
    pub fn file(&self, path: &Path) -> Option<String> {
        self.read().ok()?.files.get(path).cloned()
    }

    fn read(&self) -> SkillResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?)
    }

    fn write(&self) -> SkillResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?)
    }
}

impl MemoryFilesystemInner {
    fn has_dir(&self, path: &Path) -> bool {
        path.as_os_str().is_empty() || path == Path::new("/") || self.directories.contains(path)
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> SkillResult<()> {
        let mut inner = self.write()?;

        if inner.directories.contains(path) || inner.files.contains_key(path) {
            return Err(ApplicationError::PathExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            if !inner.has_dir(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> SkillResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if current != Path::new("/") {
                inner.directories.insert(current.clone());
            }
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SkillResult<()> {
        let mut inner = self.write()?;

        if let Some(parent) = path.parent() {
            if !inner.has_dir(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> SkillResult<String> {
        self.read()?.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn remove_dir_all(&self, path: &Path) -> SkillResult<()> {
        let mut inner = self.write()?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use skillsmith_core::error::SkillError;

    use super::*;

    #[test]
    fn create_dir_requires_parent_and_absence() {
        let fs = MemoryFilesystem::new();
        assert!(fs.create_dir(Path::new("/out/pkg")).is_err());

        fs.create_dir_all(Path::new("/out")).unwrap();
        fs.create_dir(Path::new("/out/pkg")).unwrap();

        assert!(matches!(
            fs.create_dir(Path::new("/out/pkg")),
            Err(SkillError::Application(ApplicationError::PathExists { .. }))
        ));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let view = fs.clone();

        fs.create_dir_all(Path::new("/out")).unwrap();
        fs.write_file(Path::new("/out/SKILL.md"), "hi").unwrap();

        assert_eq!(view.file(Path::new("/out/SKILL.md")).as_deref(), Some("hi"));
    }

    #[test]
    fn remove_dir_all_is_scoped() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/out/a/scripts")).unwrap();
        fs.create_dir_all(Path::new("/out/ab")).unwrap();
        fs.write_file(Path::new("/out/a/SKILL.md"), "x").unwrap();

        fs.remove_dir_all(Path::new("/out/a")).unwrap();

        assert!(!fs.exists(Path::new("/out/a")));
        assert!(!fs.exists(Path::new("/out/a/SKILL.md")));
        assert!(fs.exists(Path::new("/out/ab")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/nowhere/file"), "x").is_err());
    }
}
