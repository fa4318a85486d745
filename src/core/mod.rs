pub mod catalog;
pub mod generator;
pub mod renderer;

pub use crate::domain::document::{Block, ReportDocument};
pub use crate::domain::model::{Goal, Plan, PlanRequest, Routine, Schedule};
pub use crate::domain::ports::{AssetSource, DocumentEncoder, Storage};
pub use crate::utils::error::Result;
