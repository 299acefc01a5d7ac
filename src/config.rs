//! Run configuration, loadable from TOML.
//!
//! ```toml
//! [deadlines]
//! source = "random"
//! count = 12
//! seed = 7
//!
//! [output]
//! table = true
//! json = false
//! ```
//!
//! Every section is optional; an empty file reproduces the default run
//! (the 10-task example with per-step tables).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::generate;
use crate::scheduler::SchedulerConfig;
use crate::validation::{self, ValidationError, ValidationErrorKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub deadlines: DeadlineSource,
    pub output: OutputConfig,
}

/// Where the deadline sequence of a run comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum DeadlineSource {
    /// The built-in 10-task example.
    #[default]
    Default,
    /// `count` deadlines drawn uniformly from `0..count`.
    Random {
        count: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
    /// Explicit 0-based deadlines, validated before use.
    Explicit { values: Vec<i64> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print the forest table after every assignment.
    pub table: bool,
    /// Emit the schedule as JSON instead of text.
    pub json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            table: true,
            json: false,
        }
    }
}

impl DeadlineSource {
    /// Produces the deadline sequence, validating explicit values.
    ///
    /// A random source with `count = 0` is rejected like empty explicit
    /// input.
    pub fn resolve(&self) -> ScheduleResult<Vec<usize>> {
        match self {
            Self::Default => Ok(generate::default_deadlines()),
            Self::Random { count: 0, .. } => Err(ScheduleError::Invalid(vec![ValidationError::new(
                ValidationErrorKind::Empty,
                "no tasks to schedule",
            )])),
            Self::Random { count, seed } => Ok(generate::random_deadlines_seeded(*count, *seed)),
            Self::Explicit { values } => Ok(validation::to_slots(values)?),
        }
    }
}

impl RunConfig {
    pub fn from_file(path: &Path) -> ScheduleResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScheduleError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ScheduleResult<Self> {
        toml::from_str(content).map_err(|e| ScheduleError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> ScheduleResult<String> {
        toml::to_string_pretty(self).map_err(|e| ScheduleError::Config(e.to_string()))
    }

    /// Scheduler options implied by the output settings.
    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig {
            record_snapshots: self.output.table && !self.output.json,
        }
    }
}
