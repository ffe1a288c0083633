use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use homefax_core::StateCode;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Run seed; every random stream is derived from it.
    pub seed: u64,
    /// Number of policyholders to create.
    pub holders: u32,
    /// Policies generated for each state.
    pub policies_per_state: u32,
    /// States to generate, in order.
    pub states: Vec<StateCode>,
    /// Calendar year roof ages are measured against.
    pub as_of_year: i32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: 21,
            holders: 24,
            policies_per_state: 10,
            states: StateCode::ALL.to_vec(),
            as_of_year: 2025,
        }
    }
}

/// Summary of one state's generated policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateReport {
    pub state: StateCode,
    pub policies: u64,
    pub percentage_deductibles: u64,
    pub flat_deductibles: u64,
    pub forced_ordinance_or_law: u64,
    pub mortgaged: u64,
}

impl StateReport {
    pub fn new(state: StateCode) -> Self {
        Self {
            state,
            policies: 0,
            percentage_deductibles: 0,
            flat_deductibles: 0,
            forced_ordinance_or_law: 0,
            mortgaged: 0,
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub seed: u64,
    pub policyholders: u64,
    pub policies: u64,
    pub states: Vec<StateReport>,
    pub endorsement_usage: BTreeMap<String, u64>,
    pub written_premium_total: f64,
    #[serde(default)]
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            policyholders: 0,
            policies: 0,
            states: Vec::new(),
            endorsement_usage: BTreeMap::new(),
            written_premium_total: 0.0,
            duration_ms: 0,
        }
    }

    pub fn record_endorsement(&mut self, name: &str) {
        *self.endorsement_usage.entry(name.to_string()).or_insert(0) += 1;
    }

    pub fn state(&self, state: StateCode) -> Option<&StateReport> {
        self.states
            .iter()
            .find(|report| report.state == state)
    }
}
