use crate::utils::error::{GenError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Braced, hyphenated, upper-case GUID: `{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\{[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}\}$")
            .expect("identifier pattern is a valid regex")
    })
}

impl Identifier {
    pub const LEN: usize = 38;

    pub fn parse(value: &str) -> Result<Self> {
        if !identifier_pattern().is_match(value) {
            return Err(GenError::InvalidConfigValueError {
                field: "identifier".to_string(),
                value: value.to_string(),
                reason: "Expected {XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}".to_string(),
            });
        }
        Ok(Self(value.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Identifier {
    type Error = GenError;

    fn try_from(value: String) -> Result<Self> {
        Identifier::parse(&value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub identifier: Identifier,
}

/// 既有的主程式庫專案，每個 solution 都會引用它
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainProject {
    pub name: String,
    pub path: String,
    pub identifier: Identifier,
}

impl MainProject {
    pub const DEFAULT_NAME: &'static str = "fife_engine";
    pub const DEFAULT_PATH: &'static str = "..\\fife_engine.vcproj";

    pub fn for_mode(mode: DependencyMode) -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            path: Self::DEFAULT_PATH.to_string(),
            identifier: mode.default_main_identifier(),
        }
    }
}

/// Whether generated projects declare a build dependency on the main project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DependencyMode {
    #[default]
    None,
    MainProject,
}

impl DependencyMode {
    /// Stand-in identifiers for the main project, one per mode. They are not the
    /// GUID of any real `fife_engine.vcproj`; set the real one through
    /// `[main_project] identifier` in the config file so Visual Studio can
    /// resolve the reference.
    pub fn default_main_identifier(self) -> Identifier {
        match self {
            DependencyMode::None => Identifier("{0AC1D9D6-5A42-4C43-BB7F-6B6B3F5C9E01}".to_string()),
            DependencyMode::MainProject => {
                Identifier("{B8C4A5C2-3E9F-4D1A-9E77-2F2D6C0A7B10}".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SolutionFormat {
    #[default]
    Vs2005,
    Vs2008,
}

impl SolutionFormat {
    pub fn format_version_line(self) -> &'static str {
        match self {
            SolutionFormat::Vs2005 => "Microsoft Visual Studio Solution File, Format Version 9.00",
            SolutionFormat::Vs2008 => "Microsoft Visual Studio Solution File, Format Version 10.00",
        }
    }

    pub fn product_line(self) -> &'static str {
        match self {
            SolutionFormat::Vs2005 => "# Visual Studio 2005",
            SolutionFormat::Vs2008 => "# Visual Studio 2008",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholders {
    pub name: String,
    pub guid: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            name: "__INSERT_NAME_HERE__".to_string(),
            guid: "__INSERT_GUID_HERE__".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub solution_path: PathBuf,
    pub project_files: Vec<PathBuf>,
    pub projects: Vec<ProjectRecord>,
    pub dependency_mode: DependencyMode,
    pub format: SolutionFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_parse_normalizes_case() {
        let id = Identifier::parse("{0ac1d9d6-5a42-4c43-bb7f-6b6b3f5c9e01}").unwrap();
        assert_eq!(id.as_str(), "{0AC1D9D6-5A42-4C43-BB7F-6B6B3F5C9E01}");
        assert_eq!(id.as_str().len(), Identifier::LEN);
    }

    #[test]
    fn test_identifier_parse_rejects_bad_shapes() {
        assert!(Identifier::parse("0AC1D9D6-5A42-4C43-BB7F-6B6B3F5C9E01").is_err());
        assert!(Identifier::parse("{0AC1D9D6-5A42-4C43-BB7F-6B6B3F5C9E0}").is_err());
        assert!(Identifier::parse("{ZZZZZZZZ-5A42-4C43-BB7F-6B6B3F5C9E01}").is_err());
    }

    #[test]
    fn test_default_main_identifiers_are_valid_and_differ() {
        let none = DependencyMode::None.default_main_identifier();
        let main = DependencyMode::MainProject.default_main_identifier();
        assert!(Identifier::parse(none.as_str()).is_ok());
        assert!(Identifier::parse(main.as_str()).is_ok());
        assert_ne!(none, main);
    }

    #[test]
    fn test_dependency_mode_serde_names() {
        let json = serde_json::to_string(&DependencyMode::MainProject).unwrap();
        assert_eq!(json, "\"main-project\"");
        let format: SolutionFormat = serde_json::from_str("\"vs2008\"").unwrap();
        assert_eq!(format, SolutionFormat::Vs2008);
    }
}
