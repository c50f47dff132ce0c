use crate::core::{FileSystem, Identifier, Placeholders};
use crate::utils::error::{GenError, Result};
use regex::{Captures, Regex};
use std::path::Path;

/// Replaces every occurrence of both placeholders in one pass over the
/// template, so inserted values are never scanned again. When one token
/// contains the other, the longer one wins at a shared position.
pub fn substitute(
    template: &str,
    placeholders: &Placeholders,
    name: &str,
    identifier: &Identifier,
) -> Result<String> {
    let (longer, shorter) = if placeholders.name.len() >= placeholders.guid.len() {
        (&placeholders.name, &placeholders.guid)
    } else {
        (&placeholders.guid, &placeholders.name)
    };

    let pattern = Regex::new(&format!(
        "{}|{}",
        regex::escape(longer),
        regex::escape(shorter)
    ))
    .map_err(|e| GenError::ConfigError {
        message: format!("Invalid placeholder pattern: {}", e),
    })?;

    let rendered = pattern.replace_all(template, |caps: &Captures| {
        if caps[0] == placeholders.name {
            name.to_string()
        } else {
            identifier.as_str().to_string()
        }
    });

    Ok(rendered.into_owned())
}

/// 讀取模板並代入名稱與 GUID（每個專案都重新讀取一次）
pub fn render<F: FileSystem>(
    fs: &F,
    template_path: &Path,
    placeholders: &Placeholders,
    name: &str,
    identifier: &Identifier,
) -> Result<String> {
    let template = fs.read_to_string(template_path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => GenError::TemplateNotFound {
            path: template_path.to_path_buf(),
        },
        _ => GenError::TemplateReadError {
            path: template_path.to_path_buf(),
            source: e,
        },
    })?;

    substitute(&template, placeholders, name, identifier)
}
