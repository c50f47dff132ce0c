use crate::core::FileSystem;
use crate::utils::error::{GenError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_EXTENSION: &str = "cpp";

/// 列出目錄下（不遞迴）副檔名相符的測試檔，回傳專案名稱
///
/// The project name is the file name up to its first `.`. Order follows the
/// directory listing and is never re-sorted. Two sources with the same name
/// would write the same project file, so that is an error.
pub fn enumerate_sources<F: FileSystem>(
    fs: &F,
    directory: &Path,
    extension: &str,
) -> Result<Vec<String>> {
    if !fs.is_dir(directory) {
        return Err(GenError::DirectoryNotFound {
            path: directory.to_path_buf(),
        });
    }

    let entries = fs.list_files(directory).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => GenError::DirectoryNotFound {
            path: directory.to_path_buf(),
        },
        _ => GenError::DirectoryReadError {
            path: directory.to_path_buf(),
            source: e,
        },
    })?;

    let mut names = Vec::new();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();
    for path in entries {
        if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!("Skipping non UTF-8 file name: {}", path.display());
            continue;
        };

        let name = file_name.split('.').next().unwrap_or(file_name).to_string();
        if let Some(first) = seen.get(&name) {
            return Err(GenError::DuplicateProjectName {
                name,
                first: first.clone(),
                second: path,
            });
        }

        tracing::debug!("Found test source {} -> {}", file_name, name);
        seen.insert(name.clone(), path.clone());
        names.push(name);
    }

    Ok(names)
}
