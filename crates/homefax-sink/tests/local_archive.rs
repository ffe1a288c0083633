use std::fs::File;
use std::path::{Path, PathBuf};

use jsonschema::JSONSchema;
use schemars::schema_for;
use sha2::{Digest, Sha256};

use homefax_core::{Dataset, StateCode};
use homefax_generate::{GenerateOptions, GenerationEngine};
use homefax_render::{DocumentSet, Layout, render_all};
use homefax_sink::{LocalArchiveSink, ManifestRow, Sink};

fn fixture() -> (Dataset, DocumentSet) {
    let dataset = GenerationEngine::new(GenerateOptions {
        holders: 6,
        policies_per_state: 3,
        ..GenerateOptions::default()
    })
    .run()
    .expect("generation succeeds")
    .dataset;
    let documents = render_all(&dataset, &Layout::default()).expect("render succeeds");
    (dataset, documents)
}

fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("homefax-sink-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

async fn publish(dir: &Path) -> homefax_sink::SinkReport {
    let (dataset, documents) = fixture();
    let sink = LocalArchiveSink::new(dir.join("dataset"), dir.join("home_insurance_dataset.zip"));
    sink.publish(&dataset, &documents)
        .await
        .expect("publish succeeds")
}

#[tokio::test]
async fn archive_contains_manifests_then_pdfs() {
    let dir = scratch_dir();
    let report = publish(&dir).await;

    assert_eq!(report.sink, "local");
    assert_eq!(report.policyholders, 6);
    assert_eq!(report.policies, 9);
    assert_eq!(report.documents, 3 + 9);
    assert!(report.is_clean());

    let archive = zip::ZipArchive::new(File::open(dir.join("home_insurance_dataset.zip")).unwrap())
        .expect("readable archive");
    let names: Vec<&str> = archive.file_names().collect();
    assert_eq!(names.len(), 4 + 12);
    assert_eq!(
        &names[..7],
        &[
            "policyholders.csv",
            "policies.csv",
            "policy_manifest.csv",
            "policy_manifest.json",
            "pdf/Booklet_TN.pdf",
            "pdf/Booklet_TX.pdf",
            "pdf/Booklet_CA.pdf",
        ]
    );
    assert!(names[7..].iter().all(|name| name.starts_with("pdf/") && name.contains("_HOME_P")));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn csv_headers_match_row_fields() {
    let dir = scratch_dir();
    publish(&dir).await;
    let dataset_dir = dir.join("dataset");

    let holders = std::fs::read_to_string(dataset_dir.join("policyholders.csv")).unwrap();
    assert_eq!(
        holders.lines().next().unwrap(),
        "holder_id,first_name,last_name,date_of_birth,email,phone,mailing_address,mailing_city,mailing_state,mailing_zip"
    );
    assert_eq!(holders.lines().count(), 1 + 6);

    let policies = std::fs::read_to_string(dataset_dir.join("policies.csv")).unwrap();
    let header = policies.lines().next().unwrap();
    assert!(header.starts_with("policy_id,holder_id,state_code,state,carrier"));
    assert!(header.ends_with("has_mortgagee,mortgagee_name,mortgagee_loan_no,status"));
    assert!(policies.lines().nth(1).unwrap().starts_with("PTN001,H0001,TN,Tennessee,"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn manifest_json_matches_its_schema() {
    let dir = scratch_dir();
    publish(&dir).await;

    let data = std::fs::read(dir.join("dataset").join("policy_manifest.json")).unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_slice(&data).unwrap();
    assert_eq!(rows.len(), 9);

    let schema = serde_json::to_value(schema_for!(ManifestRow)).unwrap();
    let compiled = JSONSchema::compile(&schema).expect("schema compiles");
    for row in &rows {
        assert!(compiled.is_valid(row), "manifest row violates schema: {row}");
    }

    let first: ManifestRow = serde_json::from_value(rows[0].clone()).unwrap();
    assert_eq!(first.booklet_file, "pdf/Booklet_TN.pdf");
    assert!(first.declaration_file.ends_with("_HOME_PTN001.pdf"));
    assert_eq!(first.coverage_b, first.coverage_a / 10);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn written_files_are_stable_across_runs() {
    let hash = |dir: &Path| {
        let mut hasher = Sha256::new();
        for name in ["policyholders.csv", "policies.csv", "policy_manifest.csv"] {
            hasher.update(std::fs::read(dir.join("dataset").join(name)).unwrap());
        }
        hex::encode(hasher.finalize())
    };

    let first = scratch_dir();
    let second = scratch_dir();
    publish(&first).await;
    publish(&second).await;
    assert_eq!(hash(first.as_path()), hash(second.as_path()));
    assert_eq!(
        std::fs::read(first.join("home_insurance_dataset.zip")).unwrap(),
        std::fs::read(second.join("home_insurance_dataset.zip")).unwrap()
    );

    std::fs::remove_dir_all(&first).unwrap();
    std::fs::remove_dir_all(&second).unwrap();
}

#[tokio::test]
async fn missing_booklet_aborts_the_run() {
    let dir = scratch_dir();
    let (dataset, mut documents) = fixture();
    documents
        .booklets
        .retain(|doc| doc.filename != format!("Booklet_{}.pdf", StateCode::Tx));

    let sink = LocalArchiveSink::new(dir.join("dataset"), dir.join("out.zip"));
    let err = sink.publish(&dataset, &documents).await.unwrap_err();
    assert!(matches!(err, homefax_sink::SinkError::MissingDocument(_)));
    assert!(!dir.join("out.zip").exists());

    std::fs::remove_dir_all(&dir).unwrap();
}
