use crate::domain::ports::FileSystem;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_files_skips_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("alpha.cpp"), "").unwrap();
        fs::create_dir(temp_dir.path().join("nested.cpp")).unwrap();

        let fs_port = LocalFileSystem::new();
        let files = fs_port.list_files(temp_dir.path()).unwrap();

        assert_eq!(files, vec![temp_dir.path().join("alpha.cpp")]);
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("a.vcproj");

        let fs_port = LocalFileSystem::new();
        fs_port.create_dir_all(path.parent().unwrap()).unwrap();
        fs_port.write(&path, "<Project/>").unwrap();

        assert_eq!(fs_port.read_to_string(&path).unwrap(), "<Project/>");
        assert!(fs_port.is_dir(&temp_dir.path().join("out")));
    }
}
