use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Source directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to list {}: {source}", path.display())]
    DirectoryReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Test sources {} and {} both map to project '{name}'",
        first.display(),
        second.display()
    )]
    DuplicateProjectName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("Failed to read template {}: {source}", path.display())]
    TemplateReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Identifier generation unavailable: {reason}")]
    PlatformUnavailable { reason: String },

    #[error("Failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to parse config {}: {message}", path.display())]
    ConfigParseError { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Platform,
    Output,
    Configuration,
}

impl GenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GenError::DirectoryNotFound { .. }
            | GenError::DirectoryReadError { .. }
            | GenError::DuplicateProjectName { .. }
            | GenError::TemplateNotFound { .. }
            | GenError::TemplateReadError { .. } => ErrorCategory::Input,
            GenError::PlatformUnavailable { .. } => ErrorCategory::Platform,
            GenError::WriteError { .. } => ErrorCategory::Output,
            GenError::ConfigError { .. }
            | GenError::InvalidConfigValueError { .. }
            | GenError::ConfigParseError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GenError::DirectoryNotFound { path } => format!(
                "Check that the test source directory '{}' exists",
                path.display()
            ),
            GenError::DirectoryReadError { path, .. } => format!(
                "Check the permissions of '{}'",
                path.display()
            ),
            GenError::DuplicateProjectName { second, .. } => format!(
                "Rename '{}' so its name before the first '.' is unique",
                second.display()
            ),
            GenError::TemplateNotFound { path } => format!(
                "Create the project template at '{}' or pass --template",
                path.display()
            ),
            GenError::TemplateReadError { .. } => {
                "Check the template file permissions and encoding (UTF-8)".to_string()
            }
            GenError::PlatformUnavailable { .. } => {
                "The OS random source is unavailable; retry on a host with a working entropy source"
                    .to_string()
            }
            GenError::WriteError { path, .. } => format!(
                "Check that '{}' is writable and the disk is not full",
                path.display()
            ),
            GenError::ConfigError { .. } | GenError::ConfigParseError { .. } => {
                "Review the configuration file syntax".to_string()
            }
            GenError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Input problem: {}", self),
            ErrorCategory::Platform => format!("Platform problem: {}", self),
            ErrorCategory::Output => format!("Output problem: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = GenError::DirectoryNotFound {
            path: PathBuf::from("tests/unit"),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.recovery_suggestion().contains("tests/unit"));

        let err = GenError::WriteError {
            path: PathBuf::from("out/a.vcproj"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.category(), ErrorCategory::Output);
        assert!(err.user_friendly_message().starts_with("Output problem"));
    }
}
