pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{InMemoryFileSystem, LocalFileSystem};
pub use config::{GeneratorSettings, TomlConfig};
pub use self::core::generator::{GenerationState, SolutionGenerator};
pub use self::core::identifier::{RandomIdentifiers, SequentialIdentifiers};
pub use domain::model::{
    DependencyMode, Identifier, MainProject, Placeholders, ProjectRecord, RunSummary,
    SolutionFormat,
};
pub use utils::error::{GenError, Result};
