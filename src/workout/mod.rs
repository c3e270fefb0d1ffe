//! Workout module
//!
//! Workout types offered on the selection screen and the workout timer.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod timer;

pub use timer::{WorkoutTimer, TICK_INTERVAL};

/// Workout type variants offered on the selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    Cardio,
    Strength,
    Flexibility,
    Sports,
}

impl WorkoutType {
    /// All workout types in display order
    pub fn all() -> &'static [WorkoutType] {
        &[
            WorkoutType::Cardio,
            WorkoutType::Strength,
            WorkoutType::Flexibility,
            WorkoutType::Sports,
        ]
    }

    /// Get a human-readable description of the workout type
    pub fn description(&self) -> &'static str {
        match self {
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Strength => "Strength",
            WorkoutType::Flexibility => "Flexibility",
            WorkoutType::Sports => "Sports",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Transient state of the workout in progress
#[derive(Debug, Clone, Default)]
pub struct WorkoutSession {
    selected: Option<WorkoutType>,
    timer: WorkoutTimer,
}

impl WorkoutSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<WorkoutType> {
        self.selected
    }

    pub fn select(&mut self, workout: WorkoutType) {
        self.selected = Some(workout);
    }

    pub fn timer(&self) -> &WorkoutTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut WorkoutTimer {
        &mut self.timer
    }
}
