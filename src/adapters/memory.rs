use crate::domain::ports::FileSystem;
use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory file system. Listing order is insertion order, which lets tests
/// check that directory order survives into the solution.
#[derive(Debug, Default)]
pub struct InMemoryFileSystem {
    dirs: RefCell<HashSet<PathBuf>>,
    files: RefCell<Vec<(PathBuf, String)>>,
    list_failures: RefCell<HashSet<PathBuf>>,
    read_failures: RefCell<HashSet<PathBuf>>,
    write_failures: RefCell<HashSet<PathBuf>>,
}

impl InMemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.add_dirs(path.as_ref());
        self
    }

    pub fn with_file(self, path: impl AsRef<Path>, contents: &str) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dirs(parent);
        }
        self.upsert(path, contents);
        self
    }

    /// Listing `dir` fails with PermissionDenied even though it exists.
    pub fn fail_lists_of(self, dir: impl AsRef<Path>) -> Self {
        self.list_failures.borrow_mut().insert(dir.as_ref().to_path_buf());
        self
    }

    /// Reads of `path` fail with a non-NotFound error.
    pub fn fail_reads_of(self, path: impl AsRef<Path>) -> Self {
        self.read_failures.borrow_mut().insert(path.as_ref().to_path_buf());
        self
    }

    /// Writes to `path` (file or directory creation) fail with PermissionDenied.
    pub fn fail_writes_to(self, path: impl AsRef<Path>) -> Self {
        self.write_failures.borrow_mut().insert(path.as_ref().to_path_buf());
        self
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let path = path.as_ref();
        self.files
            .borrow()
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, c)| c.clone())
    }

    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files.borrow().iter().map(|(p, _)| p.clone()).collect()
    }

    fn add_dirs(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    fn upsert(&self, path: &Path, contents: &str) {
        let mut files = self.files.borrow_mut();
        match files.iter_mut().find(|(p, _)| p == path) {
            Some((_, existing)) => *existing = contents.to_string(),
            None => files.push((path.to_path_buf(), contents.to_string())),
        }
    }

    fn check_write(&self, path: &Path) -> io::Result<()> {
        if self.write_failures.borrow().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("write to {} denied", path.display()),
            ));
        }
        Ok(())
    }
}

impl FileSystem for InMemoryFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        if !self.is_dir(dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", dir.display()),
            ));
        }
        if self.list_failures.borrow().contains(dir) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("listing {} denied", dir.display()),
            ));
        }
        Ok(self
            .files
            .borrow()
            .iter()
            .filter(|(p, _)| p.parent() == Some(dir))
            .map(|(p, _)| p.clone())
            .collect())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if self.read_failures.borrow().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} is not valid UTF-8", path.display()),
            ));
        }
        self.contents(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.check_write(path)?;
        let parent_exists = path
            .parent()
            .map(|p| p.as_os_str().is_empty() || self.is_dir(p))
            .unwrap_or(true);
        if !parent_exists {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("parent of {} does not exist", path.display()),
            ));
        }
        self.upsert(path, contents);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.check_write(path)?;
        self.add_dirs(path);
        Ok(())
    }
}
