use std::path::PathBuf;

use serde_json::Value;

use homefax_core::StateCode;
use homefax_generate::{GenerateOptions, GenerationEngine};

fn golden_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join(name)
}

/// Compares `actual` with the committed golden file. A missing file fails the
/// test; `HOMEFAX_UPDATE_GOLDEN=1` rewrites it instead.
fn assert_golden(name: &str, actual: &Value) {
    let path = golden_path(name);
    let update = std::env::var("HOMEFAX_UPDATE_GOLDEN").is_ok_and(|value| value == "1");
    if update {
        let pretty = serde_json::to_string_pretty(actual).expect("serialize golden");
        std::fs::write(&path, format!("{pretty}\n")).expect("write golden");
    }
    assert!(
        path.exists(),
        "{} is missing; record it with HOMEFAX_UPDATE_GOLDEN=1",
        path.display()
    );

    let stored = std::fs::read_to_string(&path).expect("read golden");
    let expected: Value = serde_json::from_str(&stored).expect("parse golden");
    assert_eq!(actual, &expected, "{name} drifted; rerun with HOMEFAX_UPDATE_GOLDEN=1");
}

#[test]
fn first_texas_policy_is_stable() {
    let result = GenerationEngine::new(GenerateOptions::default())
        .run()
        .expect("generation succeeds");
    let policy = result
        .dataset
        .policies_for_state(StateCode::Tx)
        .next()
        .expect("texas policy");
    assert_eq!(policy.policy_id, "PTX001");
    assert_eq!(policy.holder_id, "H0011");
    assert_eq!(policy.coverages.dwelling, 1_200_000);
    assert_eq!(policy.deductible.kind(), "percent_wind_hail");
    assert_eq!(
        policy.endorsement_names(),
        vec!["Ordinance or Law 10%", "Animal Liability Sublimit"]
    );
    assert_eq!(policy.premium.total, 3302.6);

    let actual = serde_json::to_value(policy).expect("policy json");
    assert_golden("tx_policy_001.json", &actual);
}

#[test]
fn policyholder_roster_is_stable() {
    let engine = GenerationEngine::new(GenerateOptions::default());
    let holders = engine.generate_policyholders();
    let names: Vec<String> = holders[..3].iter().map(|holder| holder.full_name()).collect();
    assert_eq!(names, vec!["Jamie Johnson", "Hayden Miller", "Jordan Diaz"]);
    let actual = serde_json::to_value(&holders[..3]).expect("holders json");
    assert_golden("policyholders_head.json", &actual);
}
