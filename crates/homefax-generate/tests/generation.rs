use sha2::{Digest, Sha256};

use homefax_core::reference::ORDINANCE_OR_LAW_CUTOFF_YEAR;
use homefax_core::{Dataset, Deductible, StateCode, validate_dataset};
use homefax_generate::{GenerateOptions, GenerationEngine, GenerationError};

fn run(options: GenerateOptions) -> Dataset {
    GenerationEngine::new(options)
        .run()
        .expect("generation succeeds")
        .dataset
}

fn dataset_hash(dataset: &Dataset) -> String {
    let bytes = serde_json::to_vec(dataset).expect("serialize dataset");
    hex::encode(Sha256::digest(&bytes))
}

#[test]
fn same_seed_produces_identical_datasets() {
    let first = run(GenerateOptions::default());
    let second = run(GenerateOptions::default());
    assert_eq!(dataset_hash(&first), dataset_hash(&second));
}

#[test]
fn different_seeds_diverge() {
    let first = run(GenerateOptions::default());
    let second = run(GenerateOptions {
        seed: 22,
        ..GenerateOptions::default()
    });
    assert_ne!(dataset_hash(&first), dataset_hash(&second));
}

#[test]
fn default_run_has_expected_counts_and_ids() {
    let dataset = run(GenerateOptions::default());
    assert_eq!(dataset.policyholders.len(), 24);
    assert_eq!(dataset.policies.len(), 30);
    assert_eq!(dataset.policyholders[0].holder_id, "H0001");
    assert_eq!(dataset.policyholders[23].holder_id, "H0024");

    for state in StateCode::ALL {
        let ids: Vec<&str> = dataset
            .policies_for_state(state)
            .map(|policy| policy.policy_id.as_str())
            .collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(ids[0], format!("P{}001", state.code()));
        assert_eq!(ids[9], format!("P{}010", state.code()));
    }
}

#[test]
fn holders_are_assigned_cyclically_across_states() {
    let dataset = run(GenerateOptions::default());
    let holder_of = |policy_id: &str| {
        dataset
            .policies
            .iter()
            .find(|policy| policy.policy_id == policy_id)
            .map(|policy| policy.holder_id.clone())
            .expect("policy exists")
    };

    assert_eq!(holder_of("PTN001"), "H0001");
    assert_eq!(holder_of("PTN010"), "H0010");
    assert_eq!(holder_of("PTX001"), "H0011");
    assert_eq!(holder_of("PCA004"), "H0024");
    assert_eq!(holder_of("PCA005"), "H0001");
    assert_eq!(holder_of("PCA010"), "H0006");
}

#[test]
fn invariants_hold_across_seeds() {
    for seed in [1_u64, 7, 21, 99, 2024] {
        let dataset = run(GenerateOptions {
            seed,
            policies_per_state: 25,
            ..GenerateOptions::default()
        });
        validate_dataset(&dataset).expect("dataset valid");

        for policy in &dataset.policies {
            assert_eq!(
                policy.coverages.other_structures,
                policy.coverages.dwelling / 10
            );
            if let Deductible::WindHailPercentage { percentage } = policy.deductible {
                assert_eq!(policy.state, StateCode::Tx);
                assert!([0.01, 0.02, 0.03].contains(&percentage));
            }
            if policy.property.year_built < ORDINANCE_OR_LAW_CUTOFF_YEAR {
                assert!(
                    policy
                        .endorsements
                        .iter()
                        .any(|endorsement| endorsement.is_ordinance_or_law()),
                    "{} lacks ordinance or law",
                    policy.policy_id
                );
            }
            let premium = &policy.premium;
            assert!(
                (premium.subtotal
                    - (premium.base_premium + premium.endorsement_premium - premium.discount))
                    .abs()
                    < 0.005
            );
            assert!(
                (premium.total - (premium.subtotal + premium.state_tax + premium.state_fee)).abs()
                    < 0.005
            );
            assert!(policy.expiration_date > policy.effective_date);
            assert_eq!(policy.property.state, policy.state);
            assert!(policy.state.cities().contains(&policy.property.city.as_str()));
        }
    }
}

#[test]
fn single_state_matches_full_run() {
    let options = GenerateOptions::default();
    let engine = GenerationEngine::new(options.clone());
    let full = engine.run().expect("full run").dataset;

    let holders = engine.generate_policyholders();
    let texas = engine
        .generate_state(StateCode::Tx, &holders)
        .expect("texas alone");
    let from_full: Vec<_> = full
        .policies_for_state(StateCode::Tx)
        .cloned()
        .collect();
    assert_eq!(texas, from_full);
}

#[test]
fn state_streams_do_not_depend_on_other_states() {
    let all = run(GenerateOptions::default());
    let california_only = run(GenerateOptions {
        states: vec![StateCode::Ca],
        ..GenerateOptions::default()
    });

    let from_full: Vec<_> = all.policies_for_state(StateCode::Ca).collect();
    assert_eq!(from_full.len(), california_only.policies.len());
    for (left, right) in from_full.iter().zip(california_only.policies.iter()) {
        assert_eq!(left.policy_id, right.policy_id);
        assert_eq!(left.property, right.property);
        assert_eq!(left.premium, right.premium);
    }
}

#[test]
fn zero_holders_with_policies_is_rejected() {
    let engine = GenerationEngine::new(GenerateOptions {
        holders: 0,
        ..GenerateOptions::default()
    });
    assert!(matches!(engine.run(), Err(GenerationError::InvalidOptions(_))));
}

#[test]
fn unknown_state_cannot_be_regenerated() {
    let engine = GenerationEngine::new(GenerateOptions {
        states: vec![StateCode::Tn],
        ..GenerateOptions::default()
    });
    let holders = engine.generate_policyholders();
    assert!(matches!(
        engine.generate_state(StateCode::Ca, &holders),
        Err(GenerationError::InvalidOptions(_))
    ));
}

#[test]
fn report_tallies_match_dataset() {
    let result = GenerationEngine::new(GenerateOptions::default())
        .run()
        .expect("run");
    let report = &result.report;
    assert_eq!(report.policies, 30);
    assert_eq!(report.policyholders, 24);
    assert_eq!(report.states.len(), 3);

    let texas = report.state(StateCode::Tx).expect("texas report");
    assert_eq!(
        texas.percentage_deductibles + texas.flat_deductibles,
        texas.policies
    );
    assert_eq!(
        report.state(StateCode::Tn).map(|r| r.percentage_deductibles),
        Some(0)
    );

    let endorsements: u64 = report.endorsement_usage.values().sum();
    let counted: usize = result
        .dataset
        .policies
        .iter()
        .map(|policy| policy.endorsements.len())
        .sum();
    assert_eq!(endorsements, counted as u64);
}
