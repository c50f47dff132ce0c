pub mod settings;
pub mod toml_config;

pub use settings::GeneratorSettings;
pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::core::{DependencyMode, SolutionFormat};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "msvc-testgen")]
#[command(about = "Generate a Visual Studio solution with one project per unit test")]
pub struct CliConfig {
    /// Directory containing the unit test sources
    pub source_dir: PathBuf,

    /// Directory receiving the generated projects and solution
    pub output_dir: PathBuf,

    /// Project template [default: <OUTPUT_DIR>/unittest_template.xml]
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Solution file name without extension
    #[arg(long)]
    pub suite_name: Option<String>,

    /// Whether generated projects depend on the main project
    #[arg(long, value_enum)]
    pub dependency_mode: Option<DependencyMode>,

    /// Solution file format
    #[arg(long, value_enum)]
    pub format: Option<SolutionFormat>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Log per-phase timings")]
    pub monitor: bool,

    #[arg(long, help = "Print the run summary as JSON")]
    pub json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併預設值、設定檔與命令列參數（命令列優先）
    pub fn resolve_settings(&self) -> Result<GeneratorSettings> {
        let template = self
            .template
            .clone()
            .unwrap_or_else(|| GeneratorSettings::default_template_path(&self.output_dir));
        let mut settings =
            GeneratorSettings::new(self.source_dir.clone(), self.output_dir.clone(), template);

        if let Some(config_path) = &self.config {
            let file_config = TomlConfig::from_file(config_path)?;
            let config_dir = config_path.parent().unwrap_or_else(|| Path::new(""));
            settings.apply_toml(&file_config, config_dir)?;
            tracing::debug!("Loaded configuration from {}", config_path.display());

            // an explicit --template still wins over the file
            if let Some(template) = &self.template {
                settings.template_path = template.clone();
            }
        }

        if let Some(suite_name) = &self.suite_name {
            settings.suite_name = suite_name.clone();
        }
        if let Some(mode) = self.dependency_mode {
            settings.set_dependency_mode(mode);
        }
        if let Some(format) = self.format {
            settings.format = format;
        }

        Ok(settings)
    }
}
