use crate::core::{DependencyMode, SolutionFormat};
use crate::utils::error::{GenError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 生成器的 TOML 設定檔，所有區段皆為選填
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub generator: Option<GeneratorSection>,
    pub solution: Option<SolutionSection>,
    pub main_project: Option<MainProjectSection>,
    pub placeholders: Option<PlaceholderSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSection {
    pub suite_name: Option<String>,
    pub source_extension: Option<String>,
    pub project_extension: Option<String>,
    pub template: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolutionSection {
    pub format: Option<SolutionFormat>,
    pub dependency_mode: Option<DependencyMode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MainProjectSection {
    pub name: Option<String>,
    pub path: Option<String>,
    pub identifier: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceholderSection {
    pub name: Option<String>,
    pub guid: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GenError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| GenError::ConfigParseError {
            path: path.to_path_buf(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GenError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}
