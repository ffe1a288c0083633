use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use homefax_core::Dataset;
use homefax_generate::{GenerateOptions, GenerationEngine};
use homefax_render::{DocumentSet, Layout, render_all};
use homefax_sink::{Backend, RemoteBackendSink, Sink, SinkError};

#[derive(Default)]
struct FakeBackend {
    fail_holders: HashSet<String>,
    fail_policies: HashSet<String>,
    fail_uploads: HashSet<String>,
    rows: Mutex<Vec<(String, Value)>>,
    uploads: Mutex<Vec<String>>,
}

impl FakeBackend {
    fn rows(&self, table: &str) -> Vec<Value> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == table)
            .map(|(_, row)| row.clone())
            .collect()
    }

    fn uploads(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn insert(&self, table: &str, row: &Value) -> Result<String, SinkError> {
        let key = match table {
            "policyholders" => row["holder_id"].as_str(),
            _ => row["policy_number"].as_str(),
        }
        .unwrap_or_default()
        .to_string();
        if self.fail_holders.contains(&key) || self.fail_policies.contains(&key) {
            return Err(SinkError::Api {
                status: 409,
                message: format!("duplicate key {key}"),
            });
        }
        let mut rows = self.rows.lock().unwrap();
        rows.push((table.to_string(), row.clone()));
        Ok(format!("uuid-{table}-{key}"))
    }

    async fn upload(
        &self,
        path: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<String, SinkError> {
        assert_eq!(content_type, "application/pdf");
        assert!(bytes.starts_with(b"%PDF-"));
        if self.fail_uploads.contains(path) {
            return Err(SinkError::Api {
                status: 500,
                message: "storage unavailable".to_string(),
            });
        }
        self.uploads.lock().unwrap().push(path.to_string());
        Ok(path.to_string())
    }
}

fn fixture() -> (Dataset, DocumentSet) {
    let dataset = GenerationEngine::new(GenerateOptions {
        holders: 4,
        policies_per_state: 2,
        ..GenerateOptions::default()
    })
    .run()
    .expect("generation succeeds")
    .dataset;
    let documents = render_all(&dataset, &Layout::default()).expect("render succeeds");
    (dataset, documents)
}

fn generated_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

async fn publish(backend: FakeBackend) -> (homefax_sink::SinkReport, FakeBackend, Dataset) {
    let (dataset, documents) = fixture();
    let sink = RemoteBackendSink::new(backend, generated_on());
    let report = sink.publish(&dataset, &documents).await.expect("publish");
    (report, sink.into_backend(), dataset)
}

#[tokio::test]
async fn publishes_booklets_holders_then_policies() {
    let (report, backend, dataset) = publish(FakeBackend::default()).await;

    assert!(report.is_clean());
    assert_eq!(report.policyholders, 4);
    assert_eq!(report.policies, 6);
    assert_eq!(report.documents, 3 + 6);

    let uploads = backend.uploads();
    assert_eq!(
        &uploads[..3],
        &[
            "booklets/TN/Booklet_TN.pdf",
            "booklets/TX/Booklet_TX.pdf",
            "booklets/CA/Booklet_CA.pdf",
        ]
    );
    let first = &dataset.policies[0];
    assert!(uploads[3].starts_with(&format!("declarations/{}/", first.effective_date.format("%Y"))));
    assert!(uploads[3].ends_with("_HOME_PTN001.pdf"));

    let holders = backend.rows("policyholders");
    assert_eq!(holders.len(), 4);
    assert_eq!(holders[0]["mailing_address"]["state"].as_str().map(str::len), Some(2));

    let policies = backend.rows("policies");
    assert_eq!(policies.len(), 6);
    let row = &policies[0];
    assert_eq!(row["policy_number"], "PTN001");
    assert_eq!(row["policyholder_id"], format!("uuid-policyholders-{}", first.holder_id));
    assert_eq!(row["policy_type"], "homeowners");
    assert_eq!(row["coverages"]["dwelling"]["code"], "A");
    assert_eq!(row["coverages"]["medical_payments"]["code"], "F");
    assert_eq!(row["policy_period"]["term_months"], 12);
    assert!(row["state_specific"]["tennessee"]["replacement_cost_settlement"].as_bool().unwrap());
    assert_eq!(row["ingestion_metadata"]["batch_id"], "batch_2025-06-01");
    assert!(row["ingestion_metadata"]["processing_time"].is_null());

    let documents = row["documents"].as_array().unwrap();
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0]["type"], "declaration");
    assert_eq!(documents[1]["storage_path"], "booklets/TN/Booklet_TN.pdf");
}

#[tokio::test]
async fn failed_holder_skips_its_policies_without_uploading() {
    let (dataset, _) = fixture();
    let skipped = dataset.policies[0].holder_id.clone();
    let owned: Vec<String> = dataset
        .policies
        .iter()
        .filter(|policy| policy.holder_id == skipped)
        .map(|policy| policy.policy_id.clone())
        .collect();

    let backend = FakeBackend {
        fail_holders: HashSet::from([skipped.clone()]),
        ..FakeBackend::default()
    };
    let (report, backend, _) = publish(backend).await;

    assert_eq!(report.policyholders, 3);
    assert_eq!(report.policies, 6 - owned.len());
    assert!(
        report
            .failures
            .iter()
            .any(|failure| failure.record == skipped && failure.stage == "holder_insert")
    );
    for policy_id in &owned {
        assert!(report.failures.iter().any(|failure| &failure.record == policy_id
            && failure.stage == "holder_lookup"));
        assert!(
            !backend
                .uploads()
                .iter()
                .any(|path| path.ends_with(&format!("_HOME_{policy_id}.pdf")))
        );
    }
    assert!(report.orphaned_uploads.is_empty());
}

#[tokio::test]
async fn failed_policy_insert_leaves_an_orphaned_upload() {
    let backend = FakeBackend {
        fail_policies: HashSet::from(["PTX002".to_string()]),
        ..FakeBackend::default()
    };
    let (report, backend, _) = publish(backend).await;

    assert_eq!(report.policies, 5);
    assert_eq!(report.orphaned_uploads.len(), 1);
    assert!(report.orphaned_uploads[0].ends_with("_HOME_PTX002.pdf"));
    assert!(backend.uploads().contains(&report.orphaned_uploads[0]));
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].stage, "policy_insert");
}

#[tokio::test]
async fn failed_declaration_upload_still_inserts_the_policy() {
    let (dataset, documents) = fixture();
    let policy = &dataset.policies[1];
    let declaration = documents.declaration(&policy.policy_id).unwrap();
    let path = format!(
        "declarations/{}/{}",
        policy.effective_date.format("%Y"),
        declaration.filename
    );

    let backend = FakeBackend {
        fail_uploads: HashSet::from([path]),
        ..FakeBackend::default()
    };
    let (report, backend, _) = publish(backend).await;

    assert_eq!(report.policies, 6);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].stage, "declaration_upload");
    let row = backend
        .rows("policies")
        .into_iter()
        .find(|row| row["policy_number"] == policy.policy_id.as_str())
        .unwrap();
    let documents = row["documents"].as_array().unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0]["type"], "booklet");
}
