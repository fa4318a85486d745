pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::assets::FileAssetSource;
pub use adapters::encoders::OutputFormat;
pub use adapters::storage::{LocalStorage, MemoryStorage};
pub use app::enrollment::{Download, EnrollmentService};
pub use app::session::SessionStore;
pub use config::PlannerConfig;
pub use crate::core::{
    catalog::RoutineCatalog,
    generator::PlanGenerator,
    renderer::{ReportLayout, ReportRenderer},
};
pub use domain::model::{Goal, Plan, PlanRequest, Routine, Schedule};
pub use utils::error::{PlannerError, Result};
