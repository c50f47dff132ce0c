use crate::config::toml_config::TomlConfig;
use crate::core::enumerator::DEFAULT_SOURCE_EXTENSION;
use crate::core::solution::DEFAULT_PROJECT_EXTENSION;
use crate::core::{DependencyMode, Identifier, MainProject, Placeholders, SolutionFormat};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_distinct, validate_extension, validate_file_stem, validate_non_empty_string,
    validate_path, Validate,
};
use std::path::{Path, PathBuf};

pub const DEFAULT_SUITE_NAME: &str = "unit_tests";
pub const DEFAULT_TEMPLATE_FILE: &str = "unittest_template.xml";

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template_path: PathBuf,
    pub suite_name: String,
    pub source_extension: String,
    pub project_extension: String,
    pub placeholders: Placeholders,
    pub main_project: MainProject,
    pub dependency_mode: DependencyMode,
    pub format: SolutionFormat,
    main_identifier_overridden: bool,
}

impl GeneratorSettings {
    pub fn new(
        source_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        template_path: impl Into<PathBuf>,
    ) -> Self {
        let dependency_mode = DependencyMode::default();
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            template_path: template_path.into(),
            suite_name: DEFAULT_SUITE_NAME.to_string(),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            project_extension: DEFAULT_PROJECT_EXTENSION.to_string(),
            placeholders: Placeholders::default(),
            main_project: MainProject::for_mode(dependency_mode),
            dependency_mode,
            format: SolutionFormat::default(),
            main_identifier_overridden: false,
        }
    }

    /// 預設模板放在輸出目錄中
    pub fn default_template_path(output_dir: &Path) -> PathBuf {
        output_dir.join(DEFAULT_TEMPLATE_FILE)
    }

    /// Switches the mode. Unless an identifier was set explicitly, the main
    /// project takes the mode's default identifier.
    pub fn set_dependency_mode(&mut self, mode: DependencyMode) {
        self.dependency_mode = mode;
        if !self.main_identifier_overridden {
            self.main_project.identifier = mode.default_main_identifier();
        }
    }

    pub fn set_main_identifier(&mut self, identifier: Identifier) {
        self.main_project.identifier = identifier;
        self.main_identifier_overridden = true;
    }

    /// Applies the file values; explicit command-line overrides win afterwards.
    pub fn apply_toml(&mut self, config: &TomlConfig, config_dir: &Path) -> Result<()> {
        if let Some(generator) = &config.generator {
            if let Some(suite_name) = &generator.suite_name {
                self.suite_name = suite_name.clone();
            }
            if let Some(ext) = &generator.source_extension {
                self.source_extension = ext.clone();
            }
            if let Some(ext) = &generator.project_extension {
                self.project_extension = ext.clone();
            }
            if let Some(template) = &generator.template {
                // 相對路徑以設定檔所在目錄為基準
                self.template_path = config_dir.join(template);
            }
        }

        if let Some(solution) = &config.solution {
            if let Some(format) = solution.format {
                self.format = format;
            }
            if let Some(mode) = solution.dependency_mode {
                self.set_dependency_mode(mode);
            }
        }

        if let Some(main) = &config.main_project {
            if let Some(name) = &main.name {
                self.main_project.name = name.clone();
            }
            if let Some(path) = &main.path {
                self.main_project.path = path.clone();
            }
            if let Some(identifier) = &main.identifier {
                self.set_main_identifier(Identifier::parse(identifier)?);
            }
        }

        if let Some(placeholders) = &config.placeholders {
            if let Some(name) = &placeholders.name {
                self.placeholders.name = name.clone();
            }
            if let Some(guid) = &placeholders.guid {
                self.placeholders.guid = guid.clone();
            }
        }

        Ok(())
    }
}

impl Validate for GeneratorSettings {
    fn validate(&self) -> Result<()> {
        validate_path("source_dir", &self.source_dir)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_path("template", &self.template_path)?;
        validate_file_stem("suite_name", &self.suite_name)?;
        validate_extension("source_extension", &self.source_extension)?;
        validate_extension("project_extension", &self.project_extension)?;
        validate_non_empty_string("main_project.name", &self.main_project.name)?;
        validate_non_empty_string("main_project.path", &self.main_project.path)?;
        validate_non_empty_string("placeholders.name", &self.placeholders.name)?;
        validate_non_empty_string("placeholders.guid", &self.placeholders.guid)?;
        validate_distinct(
            "placeholders",
            &self.placeholders.name,
            &self.placeholders.guid,
        )?;
        Ok(())
    }
}
