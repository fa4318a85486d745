use crate::domain::model::Goal;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("No routine in the catalog for goal '{goal}'")]
    NoRoutineForGoal { goal: Goal },

    #[error("Routine '{routine}' has {available} exercises, at least {required} are required")]
    InsufficientExercises {
        routine: String,
        available: usize,
        required: usize,
    },

    #[error("Asset not available: {}", .path.display())]
    MissingAsset { path: PathBuf },

    #[error("Invalid routine catalog: {message}")]
    InvalidCatalog { message: String },

    #[error("Unknown training goal '{value}'")]
    UnknownGoal { value: String },

    #[error("No plan stored for session '{session_id}'")]
    SessionNotFound { session_id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Document encoding error: {message}")]
    EncodingError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration field '{field}' is invalid: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, PlannerError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Catalog,
    Generation,
    Rendering,
    Session,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlannerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlannerError::InsufficientExercises { .. } | PlannerError::InvalidCatalog { .. } => {
                ErrorCategory::Catalog
            }
            PlannerError::NoRoutineForGoal { .. } => ErrorCategory::Generation,
            PlannerError::MissingAsset { .. } | PlannerError::EncodingError { .. } => {
                ErrorCategory::Rendering
            }
            PlannerError::SessionNotFound { .. } => ErrorCategory::Session,
            PlannerError::ConfigError { .. }
            | PlannerError::ConfigValidationError { .. }
            | PlannerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PlannerError::UnknownGoal { .. } | PlannerError::ValidationError { .. } => {
                ErrorCategory::Input
            }
            PlannerError::IoError(_)
            | PlannerError::SerializationError(_)
            | PlannerError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PlannerError::MissingAsset { .. } => ErrorSeverity::Low,
            PlannerError::UnknownGoal { .. }
            | PlannerError::ValidationError { .. }
            | PlannerError::SessionNotFound { .. } => ErrorSeverity::Medium,
            PlannerError::NoRoutineForGoal { .. }
            | PlannerError::EncodingError { .. }
            | PlannerError::ConfigError { .. }
            | PlannerError::ConfigValidationError { .. }
            | PlannerError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            PlannerError::InsufficientExercises { .. }
            | PlannerError::InvalidCatalog { .. }
            | PlannerError::IoError(_)
            | PlannerError::SerializationError(_)
            | PlannerError::CsvError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlannerError::NoRoutineForGoal { goal } => format!(
                "There is no routine available for the goal \"{}\".",
                goal.display_name()
            ),
            PlannerError::InsufficientExercises { routine, .. } => format!(
                "The routine \"{}\" does not have enough exercises to build a plan.",
                routine
            ),
            PlannerError::MissingAsset { .. } => {
                "The report was created without its header graphic.".to_string()
            }
            PlannerError::InvalidCatalog { message } => {
                format!("The routine catalog is not valid: {}", message)
            }
            PlannerError::UnknownGoal { value } => {
                format!("\"{}\" is not a known training goal.", value)
            }
            PlannerError::SessionNotFound { .. } => {
                "No plan was found for this session. Please enroll first.".to_string()
            }
            PlannerError::ValidationError { message } => message.clone(),
            PlannerError::ConfigError { .. }
            | PlannerError::ConfigValidationError { .. }
            | PlannerError::InvalidConfigValueError { .. } => {
                format!("The configuration could not be used: {}", self)
            }
            _ => format!("Something went wrong: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Catalog => {
                "Fix the routine catalog: every routine needs a unique name \
                 and at least 3 distinct exercises"
            }
            ErrorCategory::Generation => {
                "Choose another goal or add a routine for this goal to the catalog"
            }
            ErrorCategory::Rendering => {
                "Check the logo path and the output format; PDF output needs pandoc installed"
            }
            ErrorCategory::Session => {
                "Run `vitalforce enroll` first and reuse the printed session id"
            }
            ErrorCategory::Configuration => {
                "Review the TOML configuration file and the command line flags"
            }
            ErrorCategory::Input => "Check the values passed on the command line",
            ErrorCategory::System => {
                "Check file permissions and available disk space, then try again"
            }
        }
    }
}
