use crate::domain::model::Identifier;
use crate::utils::error::Result;
use std::io;
use std::path::{Path, PathBuf};

/// File access used by the generator. Errors stay as `io::Error` so each
/// component can map them onto its own failure kind.
pub trait FileSystem {
    fn is_dir(&self, path: &Path) -> bool;
    /// Regular files directly inside `dir`, in listing order.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

pub trait IdentifierSource {
    fn generate(&self) -> Result<Identifier>;
}
