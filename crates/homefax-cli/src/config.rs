//! Run configuration: built-in defaults, an optional TOML file, then
//! command-line overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use homefax_core::StateCode;
use homefax_generate::GenerateOptions;
use homefax_sink::remote::DEFAULT_BUCKET;

use crate::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    Local,
    Remote,
}

impl SinkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SinkKind::Local => "local",
            SinkKind::Remote => "remote",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HomefaxConfig {
    pub seed: u64,
    pub holders: u32,
    pub policies_per_state: u32,
    pub states: Vec<StateCode>,
    pub as_of_year: i32,
    pub sink: SinkKind,
    pub run_dir: PathBuf,
    /// Storage bucket for the remote sink.
    pub bucket: String,
}

impl Default for HomefaxConfig {
    fn default() -> Self {
        let generate = GenerateOptions::default();
        Self {
            seed: generate.seed,
            holders: generate.holders,
            policies_per_state: generate.policies_per_state,
            states: generate.states,
            as_of_year: generate.as_of_year,
            sink: SinkKind::Local,
            run_dir: PathBuf::from("runs"),
            bucket: DEFAULT_BUCKET.to_string(),
        }
    }
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub seed: Option<u64>,
    pub holders: Option<u32>,
    pub policies_per_state: Option<u32>,
    pub states: Option<Vec<StateCode>>,
    pub sink: Option<SinkKind>,
    pub run_dir: Option<PathBuf>,
}

impl HomefaxConfig {
    /// Load `path` when given, otherwise start from the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Self::from_toml(&content)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(seed) = overrides.seed {
            self.seed = seed;
        }
        if let Some(holders) = overrides.holders {
            self.holders = holders;
        }
        if let Some(policies_per_state) = overrides.policies_per_state {
            self.policies_per_state = policies_per_state;
        }
        if let Some(states) = overrides.states {
            self.states = states;
        }
        if let Some(sink) = overrides.sink {
            self.sink = sink;
        }
        if let Some(run_dir) = overrides.run_dir {
            self.run_dir = run_dir;
        }
        self
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            seed: self.seed,
            holders: self.holders,
            policies_per_state: self.policies_per_state,
            states: self.states.clone(),
            as_of_year: self.as_of_year,
        }
    }
}
