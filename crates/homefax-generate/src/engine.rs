use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use homefax_core::{Dataset, Policy, Policyholder, StateCode, validate_dataset, validate_policy};

use crate::errors::GenerationError;
use crate::generators::{generate_policy, generate_policyholder};
use crate::model::{GenerateOptions, GenerationReport, StateReport};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub dataset: Dataset,
    pub report: GenerationReport,
}

/// Entry point for generating policyholders and policies from a seed.
///
/// Policyholders come from one random stream and each state from its own,
/// so a state's policies do not depend on which other states were requested.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        self.check_options()?;

        info!(
            seed = self.options.seed,
            holders = self.options.holders,
            policies_per_state = self.options.policies_per_state,
            states = %state_list(&self.options.states),
            "generation started"
        );

        let policyholders = self.generate_policyholders();
        let mut report = GenerationReport::new(self.options.seed);
        report.policyholders = policyholders.len() as u64;

        let mut policies = Vec::new();
        for (position, state) in self.options.states.iter().copied().enumerate() {
            let state_start = Instant::now();
            let mut state_report = StateReport::new(state);
            let generated = self.generate_state_at(state, position, &policyholders)?;

            for (policy, forced) in generated {
                state_report.policies += 1;
                if policy.deductible.is_percentage() {
                    state_report.percentage_deductibles += 1;
                } else {
                    state_report.flat_deductibles += 1;
                }
                if forced {
                    state_report.forced_ordinance_or_law += 1;
                }
                if policy.mortgagee.is_some() {
                    state_report.mortgaged += 1;
                }
                for endorsement in &policy.endorsements {
                    report.record_endorsement(&endorsement.name);
                }
                report.written_premium_total += policy.premium.total;
                policies.push(policy);
            }

            info!(
                state = %state,
                policies = state_report.policies,
                percentage_deductibles = state_report.percentage_deductibles,
                duration_ms = state_start.elapsed().as_millis() as u64,
                "state generated"
            );
            report.states.push(state_report);
        }

        report.policies = policies.len() as u64;
        report.written_premium_total = homefax_core::round_cents(report.written_premium_total);

        let dataset = Dataset {
            seed: self.options.seed,
            policyholders,
            policies,
        };
        validate_dataset(&dataset)?;

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            policyholders = report.policyholders,
            policies = report.policies,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { dataset, report })
    }

    /// Policyholders `H0001..` drawn from the holder stream.
    pub fn generate_policyholders(&self) -> Vec<Policyholder> {
        let mut rng = ChaCha8Rng::seed_from_u64(stream_seed(self.options.seed, "policyholders"));
        (1..=self.options.holders)
            .map(|index| generate_policyholder(&mut rng, index))
            .collect()
    }

    /// Regenerate one state's policies exactly as a full run would produce them.
    pub fn generate_state(
        &self,
        state: StateCode,
        policyholders: &[Policyholder],
    ) -> Result<Vec<Policy>, GenerationError> {
        self.check_options()?;
        let position = self
            .options
            .states
            .iter()
            .position(|candidate| *candidate == state)
            .ok_or_else(|| {
                GenerationError::InvalidOptions(format!("state {state} is not part of this run"))
            })?;
        let policies = self
            .generate_state_at(state, position, policyholders)?
            .into_iter()
            .map(|(policy, _)| policy)
            .collect();
        Ok(policies)
    }

    fn generate_state_at(
        &self,
        state: StateCode,
        position: usize,
        policyholders: &[Policyholder],
    ) -> Result<Vec<(Policy, bool)>, GenerationError> {
        if policyholders.is_empty() && self.options.policies_per_state > 0 {
            return Err(GenerationError::InvalidOptions(
                "policies requested without any policyholders".to_string(),
            ));
        }

        let key = format!("policies.{}", state.code());
        let mut rng = ChaCha8Rng::seed_from_u64(stream_seed(self.options.seed, &key));
        let per_state = self.options.policies_per_state as usize;
        let mut policies = Vec::with_capacity(per_state);

        for index in 1..=self.options.policies_per_state {
            let ordinal = (position * per_state + (index as usize - 1)) % policyholders.len();
            let holder_id = &policyholders[ordinal].holder_id;
            let generated =
                generate_policy(&mut rng, state, index, holder_id, self.options.as_of_year)?;
            validate_policy(&generated.policy)?;
            debug!(
                policy_id = %generated.policy.policy_id,
                holder_id = %holder_id,
                total = generated.policy.premium.total,
                "policy generated"
            );
            policies.push((generated.policy, generated.forced_ordinance_or_law));
        }

        Ok(policies)
    }

    fn check_options(&self) -> Result<(), GenerationError> {
        if self.options.states.is_empty() {
            return Err(GenerationError::InvalidOptions(
                "at least one state is required".to_string(),
            ));
        }
        for (index, state) in self.options.states.iter().enumerate() {
            if self.options.states[..index].contains(state) {
                return Err(GenerationError::InvalidOptions(format!(
                    "state {state} listed more than once"
                )));
            }
        }
        if self.options.holders == 0 && self.options.policies_per_state > 0 {
            return Err(GenerationError::InvalidOptions(
                "policies requested without any policyholders".to_string(),
            ));
        }
        Ok(())
    }
}

/// Seed for a named random stream, derived from the run seed with FNV-1a.
pub fn stream_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

fn state_list(states: &[StateCode]) -> String {
    states
        .iter()
        .map(|state| state.code())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_seeds_differ_by_key() {
        assert_ne!(stream_seed(21, "policies.TX"), stream_seed(21, "policies.CA"));
        assert_ne!(stream_seed(21, "policies.TX"), stream_seed(22, "policies.TX"));
        assert_eq!(stream_seed(21, "policyholders"), stream_seed(21, "policyholders"));
    }

    #[test]
    fn duplicate_states_are_rejected() {
        let engine = GenerationEngine::new(GenerateOptions {
            states: vec![StateCode::Tx, StateCode::Tx],
            ..GenerateOptions::default()
        });
        assert!(matches!(
            engine.run(),
            Err(GenerationError::InvalidOptions(_))
        ));
    }
}
