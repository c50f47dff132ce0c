pub mod enumerator;
pub mod generator;
pub mod identifier;
pub mod solution;
pub mod template;

pub use crate::domain::model::{
    DependencyMode, Identifier, MainProject, Placeholders, ProjectRecord, RunSummary,
    SolutionFormat,
};
pub use crate::domain::ports::{FileSystem, IdentifierSource};
pub use crate::utils::error::Result;
