//! Routine catalog.
//!
//! The built-in catalog is created once and shared read-only. Custom catalogs
//! can be loaded from TOML and must pass [`RoutineCatalog::validate`] before
//! they are handed to the generator.

use crate::domain::model::{Goal, Routine};
use crate::utils::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

/// Every routine needs this many exercises for a day to be sampled.
pub const MIN_EXERCISES_PER_ROUTINE: usize = 3;

static BUILTIN_CATALOG: LazyLock<RoutineCatalog> = LazyLock::new(build_builtin_catalog);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutineCatalog {
    routines: Vec<Routine>,
}

impl RoutineCatalog {
    pub fn new(routines: Vec<Routine>) -> Self {
        Self { routines }
    }

    pub fn builtin() -> &'static RoutineCatalog {
        &BUILTIN_CATALOG
    }

    /// Loads and validates a catalog file made of `[[routines]]` tables.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded {} routines from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: RoutineCatalog =
            toml::from_str(content).map_err(|e| PlannerError::ConfigValidationError {
                field: "routines".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    pub fn len(&self) -> usize {
        self.routines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }

    /// Routines whose goal matches exactly, in catalog order.
    pub fn for_goal(&self, goal: Goal) -> Vec<&Routine> {
        self.routines.iter().filter(|r| r.goal == goal).collect()
    }

    pub fn find(&self, name: &str) -> Option<&Routine> {
        self.routines.iter().find(|r| r.name == name)
    }

    pub fn missing_goals(&self) -> Vec<Goal> {
        Goal::ALL
            .into_iter()
            .filter(|goal| !self.routines.iter().any(|r| r.goal == *goal))
            .collect()
    }

    /// Startup check for catalog defects. Goals without routines are not an
    /// error here; generation for them fails with `NoRoutineForGoal`.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();

        for routine in &self.routines {
            if routine.name.trim().is_empty() {
                return Err(PlannerError::InvalidCatalog {
                    message: "routine name cannot be empty".to_string(),
                });
            }

            if !names.insert(routine.name.as_str()) {
                return Err(PlannerError::InvalidCatalog {
                    message: format!("duplicate routine name '{}'", routine.name),
                });
            }

            if routine.exercises.len() < MIN_EXERCISES_PER_ROUTINE {
                return Err(PlannerError::InsufficientExercises {
                    routine: routine.name.clone(),
                    available: routine.exercises.len(),
                    required: MIN_EXERCISES_PER_ROUTINE,
                });
            }

            let mut seen = HashSet::new();
            if let Some(duplicate) = routine.exercises.iter().find(|e| !seen.insert(e.as_str())) {
                return Err(PlannerError::InvalidCatalog {
                    message: format!(
                        "routine '{}' lists exercise '{}' more than once",
                        routine.name, duplicate
                    ),
                });
            }
        }

        Ok(())
    }
}

fn build_builtin_catalog() -> RoutineCatalog {
    RoutineCatalog::new(vec![
        Routine::new(
            "Routine 1 - Full Body",
            "Works the whole body through varied combinations.",
            Goal::MuscleGain,
            ["Squats", "Bench press", "Row", "Deadlift", "Plank", "Push-ups"],
        ),
        Routine::new(
            "Routine 2 - Total Strength",
            "Built around compound lifts and maximal strength.",
            Goal::MuscleGain,
            ["Deadlift", "Overhead press", "Pull-ups", "Dips", "Biceps curl", "Bench press"],
        ),
        Routine::new(
            "Routine 3 - Cardio & Endurance",
            "Ideal for improving endurance and lung capacity.",
            Goal::FatLoss,
            ["Running", "Burpees", "Cycling", "Climbers", "Jump rope", "Brisk walk"],
        ),
        Routine::new(
            "Routine 4 - Intense HIIT",
            "High intensity to burn fat in little time.",
            Goal::FatLoss,
            ["Burpees", "Jumps", "Plank", "Push-ups", "Running", "Mountain climbers"],
        ),
        Routine::new(
            "Routine 5 - Functional",
            "Training for strength, balance and mobility.",
            Goal::MuscleGain,
            ["Lunges", "Kettlebell swings", "Burpees", "Side plank", "Push-ups", "15 min run"],
        ),
        Routine::new(
            "Routine 6 - Calisthenics",
            "Uses your own body weight to define and tone.",
            Goal::FatLoss,
            ["Pull-ups", "Push-ups", "Dips", "Crunches", "Plank", "Jump squats"],
        ),
    ])
}
